/// Data layer: folder listing, loading and the table model.
///
/// Architecture:
/// ```text
///   data folder
///        │
///        ▼
///   ┌──────────┐
///   │  lister   │  *.csv names, storage order
///   └──────────┘
///        │  selected name
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  unique columns, typed rows, name index
///   └──────────┘
/// ```

pub mod lister;
pub mod loader;
pub mod model;
