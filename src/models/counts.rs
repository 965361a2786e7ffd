use serde::Serialize;
use std::ops::Add;

/// Present / absent tallies, either for one employee or for the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceCounts {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceCounts {
    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    /// Share of present marks in percent, `None` when nothing was marked.
    pub fn presence_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.present as f64 * 100.0 / total as f64),
        }
    }

    /// Chart input: present count then absent count.
    pub fn chart_data(&self) -> [usize; 2] {
        [self.present, self.absent]
    }
}

impl Add for AttendanceCounts {
    type Output = AttendanceCounts;

    fn add(self, rhs: AttendanceCounts) -> AttendanceCounts {
        AttendanceCounts {
            present: self.present + rhs.present,
            absent: self.absent + rhs.absent,
        }
    }
}
