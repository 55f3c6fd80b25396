use serde::{Deserialize, Serialize};

/// Size of the visible calendar window.
///
/// Serialized in the external-tag form `{"months": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibleDuration {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
}

impl Default for VisibleDuration {
    fn default() -> Self {
        Self::Months(1)
    }
}

impl VisibleDuration {
    pub fn count(self) -> u32 {
        match self {
            Self::Days(n) | Self::Weeks(n) | Self::Months(n) | Self::Years(n) => n,
        }
    }

    fn with_count(self, count: u32) -> Self {
        match self {
            Self::Days(_) => Self::Days(count),
            Self::Weeks(_) => Self::Weeks(count),
            Self::Months(_) => Self::Months(count),
            Self::Years(_) => Self::Years(count),
        }
    }

    /// One unit of the same kind, used for single-step paging.
    pub fn unit(self) -> Self {
        self.with_count(1)
    }

    /// The amount a centred window extends before its anchor unit.
    ///
    /// Half the duration rounded down, minus one more for even counts so the
    /// anchor unit sits just before the middle of the window.
    pub fn half(self) -> Self {
        let count = self.count();
        let mut half = count / 2;
        if half > 0 && count % 2 == 0 {
            half -= 1;
        }
        self.with_count(half)
    }

    /// The duration minus one unit, saturating at zero.
    pub fn shortened(self) -> Self {
        self.with_count(self.count().saturating_sub(1))
    }
}

/// How far paging moves the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBehavior {
    /// Page by the whole visible duration.
    #[default]
    Visible,
    /// Page by a single unit of the visible duration.
    Single,
}

/// Where a date is placed within a freshly aligned window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAlignment {
    #[default]
    Center,
    Start,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_durations() {
        assert_eq!(VisibleDuration::Months(1).half(), VisibleDuration::Months(0));
        assert_eq!(VisibleDuration::Months(2).half(), VisibleDuration::Months(0));
        assert_eq!(VisibleDuration::Months(3).half(), VisibleDuration::Months(1));
        assert_eq!(VisibleDuration::Weeks(4).half(), VisibleDuration::Weeks(1));
    }

    #[test]
    fn duration_deserializes_from_tagged_map() {
        let duration: VisibleDuration = serde_json::from_str(r#"{"weeks": 2}"#).unwrap();
        assert_eq!(duration, VisibleDuration::Weeks(2));
    }
}
