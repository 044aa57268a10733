/// The chart types offered in the plot dropdown. "No selection" is `None`
/// at the call sites, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Line,
    Bar,
    Scatter,
    Distribution,
    Count,
}

impl PlotKind {
    pub const ALL: [Self; 5] = [
        Self::Line,
        Self::Bar,
        Self::Scatter,
        Self::Distribution,
        Self::Count,
    ];

    /// Dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "Line Plot",
            Self::Bar => "Bar Chart",
            Self::Scatter => "Scatter Plot",
            Self::Distribution => "Distribution Plot",
            Self::Count => "Count Plot",
        }
    }

    /// Leading words of the figure title.
    pub fn title_name(self) -> &'static str {
        match self {
            Self::Distribution => "Distribution",
            other => other.label(),
        }
    }

    /// Fixed Y label replacing the user's Y selection.
    pub fn y_label_override(self) -> Option<&'static str> {
        match self {
            Self::Distribution => Some("Density"),
            Self::Count => Some("Count"),
            _ => None,
        }
    }
}
