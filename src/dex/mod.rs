// imports
pub mod chains;
pub mod path;
pub mod quoter;
pub mod router;

// re-exports
pub use path::{decode_path, encode_path};
pub use quoter::{Quote, QuoteClient, QuoterV2};
pub use router::{RouteFinder, RouteSearch, SwapKind, SwapPath, find_best_swap_path};
