//! Definitions of the supported networks and their token & treasury constants.
//!
//! The tables below are keyed exhaustively by [`Network`], so a missing entry
//! for a newly added network is a compile error rather than a runtime one.

use std::fmt::{self, Display};

use clap::ValueEnum;

/// The networks to which the contracts can be deployed
#[derive(ValueEnum, Copy, Clone)]
pub enum Network {
    /// The Fuji testnet
    Fuji,
    /// The Avalanche mainnet
    Avalanche,
}

/// An ERC20 token known to the deploy scripts, pinned to a single network
#[derive(Copy, Clone)]
pub struct Token {
    /// The address of the token contract, in hex
    pub address: &'static str,
    /// The number of decimals the token is denominated in
    pub decimals: u8,
    /// The token's ticker symbol
    pub symbol: &'static str,
    /// The token's display name
    pub name: &'static str,
}

impl Network {
    /// The EIP-155 chain ID of the network
    pub const fn chain_id(&self) -> u64 {
        match self {
            Network::Fuji => 43113,
            Network::Avalanche => 43114,
        }
    }

    /// The wrapped native token (WAVAX) on the network
    pub const fn wavax(&self) -> Token {
        match self {
            Network::Fuji => Token {
                address: "0xd00ae08403B9bbb9124bB305C09058E32C39A48c",
                decimals: 18,
                symbol: "WAVAX",
                name: "Wrapped AVAX",
            },
            Network::Avalanche => Token {
                address: "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7",
                decimals: 18,
                symbol: "WAVAX",
                name: "Wrapped AVAX",
            },
        }
    }

    /// The RADI reward token on the network
    pub const fn radi(&self) -> Token {
        match self {
            Network::Fuji => Token {
                address: "0x600615234c0a427834A4344D10fEaCA374B2dfCB",
                decimals: 18,
                symbol: "RADI",
                name: "RADI",
            },
            Network::Avalanche => Token {
                address: "0x9c5bBb5169B66773167d86818b3e149A4c7e1d1A",
                decimals: 18,
                symbol: "RADI",
                name: "RADI",
            },
        }
    }

    /// The stable token paired against RADI on the network
    pub const fn stable_token(&self) -> Token {
        match self {
            Network::Fuji => Token {
                address: "0x2058ec2791dD28b6f67DB836ddf87534F4Bbdf22",
                decimals: 6,
                symbol: "FUJISTABLE",
                name: "The Fuji stablecoin",
            },
            Network::Avalanche => Token {
                address: "0xc7198437980c041c805A1EDcbA50c1Ce5db95118",
                decimals: 18,
                symbol: "USDT",
                name: "USDT",
            },
        }
    }

    /// The address of the `TreasuryVester` contract deployed on the network
    pub const fn treasury_vester(&self) -> &'static str {
        match self {
            Network::Fuji => "0xe3f486d0401fC946aEB95539fACedf0016A342BB",
            Network::Avalanche => "0x5720c005127AbB4Cad729B255C652BeD316cEd7e",
        }
    }

    /// The constructor arguments for the `LiquidityPoolManager` contract,
    /// in constructor order: wrapped native token, reward token, stable
    /// token, treasury vester.
    ///
    /// All four addresses are drawn from this network's tables.
    pub const fn pool_manager_constructor_args(
        &self,
    ) -> (&'static str, &'static str, &'static str, &'static str) {
        (
            self.wavax().address,
            self.radi().address,
            self.stable_token().address,
            self.treasury_vester(),
        )
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Fuji => write!(f, "fuji"),
            Network::Avalanche => write!(f, "avalanche"),
        }
    }
}
