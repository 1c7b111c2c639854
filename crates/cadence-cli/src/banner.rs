use cadence_core::PhaseKind;

const RED: &str = "\x1b[1;31m";
const BLUE: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

const TITLE: &str = r"
  ____    _    ____  _____ _   _  ____ _____
 / ___|  / \  |  _ \| ____| \ | |/ ___| ____|
| |     / _ \ | | | |  _| |  \| | |   |  _|
| |___ / ___ \| |_| | |___| |\  | |___| |___
 \____/_/   \_\____/|_____|_| \_|\____|_____|
";

const TAGLINE: &str = "P O M O D O R O   T I M E R";

const WORK: &str = r"
__        _____  ____  _  __
\ \      / / _ \|  _ \| |/ /
 \ \ /\ / / | | | |_) | ' /
  \ V  V /| |_| |  _ <| . \
   \_/\_/  \___/|_| \_\_|\_\
";

const BREAK: &str = r"
 ____  ____  _____    _    _  __
| __ )|  _ \| ____|  / \  | |/ /
|  _ \| |_) |  _|   / _ \ | ' /
| |_) |  _ <| |___ / ___ \| . \
|____/|_| \_\_____/_/   \_\_|\_\
";

const LONG: &str = r"
 _     ___  _   _  ____
| |   / _ \| \ | |/ ___|
| |  | | | |  \| | |  _
| |__| |_| | |\  | |_| |
|_____\___/|_| \_|\____|
";

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn title(color: bool) -> String {
    format!(
        "{}\n{}   {}\nStrategic pauses, sustained focus\n\n",
        paint(TITLE, RED, color),
        paint(TAGLINE, BLUE, color),
        paint(concat!("(Version ", env!("CARGO_PKG_VERSION"), ")"), RED, color),
    )
}

pub fn phase(kind: PhaseKind) -> String {
    match kind {
        PhaseKind::Work => WORK.to_string(),
        PhaseKind::ShortBreak => BREAK.to_string(),
        PhaseKind::LongBreak => format!("{LONG}{BREAK}"),
    }
}
