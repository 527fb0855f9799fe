//! Static reference data shared by several components: the central-scheme
//! catalogue (C8/C11), ministry markers (C8/C11), and the city/state map
//! (C10). Kept in one module since all three are hand-curated lookup tables
//! rather than derived logic.

pub mod ministries;
pub mod regions;
pub mod schemes;

pub use ministries::detect_ministries;
pub use regions::map_to_state;
pub use schemes::find_schemes_in_text;
