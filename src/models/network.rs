use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain the wallet is currently pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    #[default]
    Mainnet,
    Ropsten,
    Kovan,
    Rinkeby,
    Goerli,
}

impl Network {
    /// Savings markets only exist on the primary network.
    pub fn is_primary(self) -> bool {
        self == Network::Mainnet
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Ropsten => "ropsten",
            Network::Kovan => "kovan",
            Network::Rinkeby => "rinkeby",
            Network::Goerli => "goerli",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
