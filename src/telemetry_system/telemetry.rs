use crate::session::history::HistoryEntry;
use crate::trajectory_system::trajectory::Termination;

/// Summary of one throw as shown in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowRecord {
    pub label: String,
    pub color: String,
    pub landing_distance: f64,
    pub max_height: f64,
    pub flight_time: f64,
    pub sample_count: usize,
    pub termination: Termination,
}

pub struct Telemetry {
    pub log: Vec<String>,
    records: Vec<ThrowRecord>,
    max_distance: f64,
    max_height: f64,
    truncated: usize,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            records: Vec::new(),
            max_distance: 0.0,
            max_height: 0.0,
            truncated: 0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    pub fn collect(&mut self, entry: &HistoryEntry) {
        let trajectory = &entry.trajectory;
        let record = ThrowRecord {
            label: entry.style.label.clone(),
            color: entry.style.color.clone(),
            landing_distance: trajectory.landing_distance(),
            max_height: trajectory.max_height(),
            flight_time: trajectory.flight_time(),
            sample_count: trajectory.len(),
            termination: trajectory.termination(),
        };

        self.max_distance = self.max_distance.max(record.landing_distance);
        self.max_height = self.max_height.max(record.max_height);

        let outcome = match record.termination {
            Termination::GroundContact => "landed",
            Termination::TimeLimit => {
                self.truncated += 1;
                "cut off (time limit)"
            }
        };

        self.log.push(format!(
            "#{} {} [{}]\n\
             Distance: {}\n\
             Max Height: {}\n\
             Flight Time: {}\n\
             Samples: {}\n\
             Outcome: {}\n",
            entry.id.sequence,
            record.label,
            record.color,
            Self::format_distance(record.landing_distance),
            Self::format_distance(record.max_height),
            Self::format_time(record.flight_time),
            record.sample_count,
            outcome,
        ));
        self.records.push(record);
    }

    pub fn records(&self) -> &[ThrowRecord] {
        &self.records
    }

    pub fn report(&self) -> String {
        let mut out = String::from("--- Throw Log ---\n");
        for entry in &self.log {
            out.push_str(entry);
            out.push('\n');
        }
        out.push_str("--- End of Log ---\n");

        out.push_str("\n--- Summary ---\n");
        out.push_str(&format!("Throws: {}\n", self.records.len()));
        out.push_str(&format!(
            "Farthest Landing: {}\n",
            Self::format_distance(self.max_distance)
        ));
        out.push_str(&format!(
            "Highest Point: {}\n",
            Self::format_distance(self.max_height)
        ));
        if self.truncated > 0 {
            out.push_str(&format!("Cut Off By Time Limit: {}\n", self.truncated));
        }
        out
    }

    pub fn display_data(&self) {
        print!("{}", self.report());
    }
}
