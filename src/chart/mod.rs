/// Chart layer: turns a loaded table and a plot request into a `Figure`.
///
/// ```text
///   Table + PlotRequest
///        │
///        ▼
///   ┌──────────┐
///   │  figure   │  validate axes, dispatch on PlotKind
///   └──────────┘
///        │ uses
///        ▼
///   ┌──────────┐
///   │  stats    │  group means, counts, histogram bins, KDE
///   └──────────┘
/// ```

pub mod figure;
pub mod kind;
pub mod stats;
