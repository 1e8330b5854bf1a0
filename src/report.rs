use chrono::{DateTime, Utc};
use meetright::{Roster, WorkingHoursStatus, classify_working_hours, local_time};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

pub fn print_roster(roster: &Roster, now: DateTime<Utc>, color: bool) {
    let palette = ansi::Palette::new(color);

    if roster.is_empty() {
        println!("{}", palette.dim("No team members yet. Add one with `meetright add <name> <timezone>`."));
        return;
    }

    for member in roster.members() {
        let line = match (local_time(now, &member.timezone), classify_working_hours(now, &member.timezone)) {
            (Ok(local), Ok(status)) => format!(
                "  {} {}  {}  {:<20} {} {}",
                palette.paint("●", status_color(status)),
                palette.bold(local.format("%I:%M %p").to_string()),
                palette.dim(format!("{:<11}", local.format("%a, %b %-d").to_string())),
                member.name,
                palette.paint(format!("{:<24}", member.timezone.replace('_', " ")), ansi::CYAN),
                palette.dim(status.label()),
            ),
            // Entries passed validation on creation; reaching this arm means
            // the tz database and the validation pattern disagree. Keep the
            // listing alive and show the entry as unresolvable.
            _ => format!(
                "  {} {:<32} {}",
                palette.paint("●", ansi::GRAY),
                member.name,
                palette.paint(format!("unresolvable timezone '{}'", member.timezone), ansi::YELLOW),
            ),
        };

        println!("{line}");
        println!("     {}", palette.dim(format!("id {}", member.id)));
    }
}

fn status_color(status: WorkingHoursStatus) -> &'static str {
    match status {
        WorkingHoursStatus::Working => ansi::GREEN,
        WorkingHoursStatus::Borderline => ansi::YELLOW,
        WorkingHoursStatus::Off => ansi::RED,
    }
}
