mod asset;
mod collectible;
mod investment;
mod network;
mod savings;
mod state;

pub use asset::{find_asset, Asset};
pub use collectible::{Collectible, CollectibleFamily, CollectibleRow};
pub use investment::InvestmentPosition;
pub use network::Network;
pub use savings::{SavingsPosition, UnderlyingAsset};
pub use state::WalletState;
