use screener::config::{self, ScreenerConfig};
use screener::ens::ENS_REGISTRY;
use screener::network::{Network, SANCTIONS_ORACLE};
use std::time::Duration;

const VARS: &[&str] = &[
    "ETH_RPC_URL",
    "RPC_URL",
    "INFURA_API_KEY",
    "SCREEN_CHAIN_ID",
    "SANCTIONS_ORACLE",
    "ENS_REGISTRY",
    "ORACLE_TIMEOUT_MS",
];

fn clear() {
    for v in VARS {
        std::env::remove_var(v);
    }
}

// Environment is process-global, so every case runs in one test.
#[test]
fn config_from_env() {
    clear();
    let cfg = ScreenerConfig::from_env().unwrap();
    assert_eq!(cfg.network, Network::Ethereum);
    assert_eq!(cfg.oracle, SANCTIONS_ORACLE);
    assert_eq!(cfg.ens_registry, ENS_REGISTRY);
    assert_eq!(cfg.oracle_timeout, Duration::from_secs(5));
    assert_eq!(cfg.rpc_url, "https://mainnet.infura.io/v3/");

    std::env::set_var("INFURA_API_KEY", "abc123");
    assert_eq!(
        config::rpc_url(Network::Ethereum).unwrap(),
        "https://mainnet.infura.io/v3/abc123"
    );
    assert_eq!(
        config::rpc_url(Network::Polygon).unwrap(),
        "https://polygon-mainnet.infura.io/v3/abc123"
    );
    assert_eq!(
        config::rpc_url(Network::Arbitrum).unwrap(),
        "https://arbitrum-mainnet.infura.io/v3/abc123"
    );
    let err = config::rpc_url(Network::BnbChain).unwrap_err();
    assert!(err.to_string().contains("RPC_URL"));

    std::env::set_var("SCREEN_CHAIN_ID", "137");
    std::env::set_var("ORACLE_TIMEOUT_MS", "250");
    let cfg = ScreenerConfig::from_env().unwrap();
    assert_eq!(cfg.network, Network::Polygon);
    assert_eq!(cfg.rpc_url, "https://polygon-mainnet.infura.io/v3/abc123");
    assert_eq!(cfg.oracle_timeout, Duration::from_millis(250));

    std::env::set_var("SCREEN_CHAIN_ID", "42161");
    let cfg = ScreenerConfig::from_env().unwrap();
    assert_eq!(cfg.rpc_url, "https://arbitrum-mainnet.infura.io/v3/abc123");

    std::env::set_var("SCREEN_CHAIN_ID", "56");
    assert!(ScreenerConfig::from_env().is_err());

    std::env::set_var("RPC_URL", "http://fallback.example.com");
    assert_eq!(
        config::rpc_url(Network::BnbChain).unwrap(),
        "http://fallback.example.com"
    );
    assert_eq!(ScreenerConfig::from_env().unwrap().network, Network::BnbChain);
    std::env::set_var("ETH_RPC_URL", "http://primary.example.com");
    assert_eq!(
        config::rpc_url(Network::Ethereum).unwrap(),
        "http://primary.example.com"
    );

    std::env::set_var("SCREEN_CHAIN_ID", "137");

    std::env::set_var("ORACLE_TIMEOUT_MS", "soon");
    assert_eq!(
        ScreenerConfig::from_env().unwrap().oracle_timeout,
        Duration::from_secs(5)
    );

    std::env::set_var("SCREEN_CHAIN_ID", "999999");
    assert!(ScreenerConfig::from_env().is_err());
    std::env::set_var("SCREEN_CHAIN_ID", "one");
    assert!(ScreenerConfig::from_env().is_err());
    std::env::remove_var("SCREEN_CHAIN_ID");

    std::env::set_var("SANCTIONS_ORACLE", "0xnope");
    assert!(ScreenerConfig::from_env().is_err());
    std::env::set_var("SANCTIONS_ORACLE", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    let cfg = ScreenerConfig::from_env().unwrap();
    assert_eq!(cfg.oracle.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

    clear();
}

#[test]
fn networks_share_oracle_and_link_tokens() {
    for n in Network::ALL {
        assert_eq!(Network::from_chain_id(n.chain_id()).unwrap(), n);
        assert_eq!(n.sanctions_oracle(), SANCTIONS_ORACLE);
    }
    assert_eq!(
        SANCTIONS_ORACLE.to_string().to_lowercase(),
        "0x40c57923924b5c5c5455c48d93317139addac8fb"
    );
    assert_eq!(
        ENS_REGISTRY.to_lower_hex(),
        "0x00000000000c2e074ec69a0dfb2997ba6c7d2e1e"
    );
    let usdc = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse().unwrap();
    assert_eq!(
        Network::Ethereum.token_link(&usdc),
        "https://etherscan.io/token/0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
    );
    assert!(Network::Ethereum.supports_ens());
    assert!(!Network::Arbitrum.supports_ens());
}
