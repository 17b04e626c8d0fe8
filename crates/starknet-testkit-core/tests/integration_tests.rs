//! Integration tests for starknet-testkit-core.
//!
//! These tests drive the registries end to end over an ERC20-flavored
//! contract ABI: the document shapes tooling actually feeds in, struct and
//! event lookup by both identifier forms, and calldata flattening of the
//! resulting record values.

use std::sync::Arc;

use starknet_testkit_core::{
    flatten, CallValue, EventRegistry, Record, RegistryError, StructRegistry, DEFAULT_MAX_DEPTH,
};
use starknet_testkit_types::{get_selector_from_name, CairoType, ContractAbi, Felt};

const ERC20_ABI: &str = r#"[
    {
        "type": "struct",
        "name": "Uint256",
        "size": 2,
        "members": [
            {"name": "low", "type": "felt", "offset": 0},
            {"name": "high", "type": "felt", "offset": 1}
        ]
    },
    {
        "type": "event",
        "name": "Transfer",
        "keys": [],
        "data": [
            {"name": "from_", "type": "felt"},
            {"name": "to", "type": "felt"},
            {"name": "value", "type": "Uint256"}
        ]
    },
    {
        "type": "event",
        "name": "Approval",
        "keys": [],
        "data": [
            {"name": "owner", "type": "felt"},
            {"name": "spender", "type": "felt"},
            {"name": "value", "type": "Uint256"}
        ]
    },
    {
        "type": "event",
        "name": "accounts_flagged",
        "keys": [{"name": "accounts_len", "type": "felt"}],
        "data": [{"name": "accounts", "type": "felt*"}]
    },
    {
        "type": "constructor",
        "name": "constructor",
        "inputs": [
            {"name": "name", "type": "felt"},
            {"name": "symbol", "type": "felt"},
            {"name": "initial_supply", "type": "Uint256"},
            {"name": "recipient", "type": "felt"}
        ],
        "outputs": []
    },
    {
        "type": "function",
        "name": "transfer",
        "inputs": [
            {"name": "recipient", "type": "felt"},
            {"name": "amount", "type": "Uint256"}
        ],
        "outputs": [{"name": "success", "type": "felt"}]
    }
]"#;

fn load_abi() -> ContractAbi {
    ContractAbi::from_json(ERC20_ABI).expect("parse ABI")
}

/// The same ABI also parses when wrapped in a contract definition object.
#[test]
fn test_contract_definition_object_round_trip() {
    let wrapped = format!(
        r#"{{"program": {{}}, "entry_points_by_type": {{}}, "abi": {}}}"#,
        ERC20_ABI
    );
    let abi = ContractAbi::from_json(&wrapped).expect("parse wrapped ABI");
    assert_eq!(abi.len(), load_abi().len());

    let registry = StructRegistry::new(&abi).expect("build struct registry");
    assert!(registry.contains("Uint256"));
}

/// Struct lookup returns one shared schema whose fields follow declaration order.
#[test]
fn test_struct_registry_end_to_end() {
    let abi = load_abi();
    let mut registry = StructRegistry::new(&abi).expect("build struct registry");

    assert!(registry.contains("Uint256"));
    assert!(!registry.contains("Transfer"));

    let definition = registry
        .get_struct_definition("Uint256")
        .expect("definition");
    let members: Vec<_> = definition.member_names().collect();
    assert_eq!(members, vec!["low", "high"]);

    let first = registry.get_contract_struct("Uint256").expect("schema");
    let second = registry.get_contract_struct("Uint256").expect("schema");
    assert!(
        Arc::ptr_eq(&first, &second),
        "repeated lookups should share one schema"
    );
    assert_eq!(first.fields(), &["low".to_string(), "high".to_string()]);
}

/// Event lookup by name and by selector returns the same schema and types.
#[test]
fn test_event_lookup_by_name_and_selector() {
    let abi = load_abi();
    let mut registry = EventRegistry::new(&abi);

    let selector = get_selector_from_name("Transfer");
    assert!(registry.contains("Transfer"));
    assert!(registry.contains(selector));

    let by_name = registry.get_contract_event("Transfer").expect("by name");
    let by_selector = registry.get_contract_event(selector).expect("by selector");
    assert!(Arc::ptr_eq(&by_name, &by_selector));
    assert_eq!(
        by_name.fields(),
        &["from_".to_string(), "to".to_string(), "value".to_string()]
    );

    let types = registry
        .get_event_argument_types(selector)
        .expect("argument types");
    assert_eq!(
        types,
        vec![
            CairoType::Felt,
            CairoType::Felt,
            CairoType::Struct("Uint256".to_string()),
        ]
    );
}

/// The Transfer selector matches the value StarkNet explorers publish.
#[test]
fn test_transfer_selector_matches_published_value() {
    let expected = Felt::from_str_radix(
        "99cd8bde557814842a3121e8ddfd433a539b8c9f14bf31ebf108d12e6196e9",
        16,
    )
    .expect("parse hex");
    assert_eq!(get_selector_from_name("Transfer"), expected);

    let abi = load_abi();
    let registry = EventRegistry::new(&abi);
    assert!(registry.contains(expected));
}

/// An array and its length argument pair across the keys/data boundary.
#[test]
fn test_array_pairing_spans_keys_and_data() {
    let abi = load_abi();
    let mut registry = EventRegistry::new(&abi);

    let record = registry
        .get_contract_event("accounts_flagged")
        .expect("schema");
    assert_eq!(record.fields(), &["accounts".to_string()]);

    let types = registry
        .get_event_argument_types("accounts_flagged")
        .expect("argument types");
    assert_eq!(types, vec![CairoType::Pointer(Box::new(CairoType::Felt))]);
}

/// Struct record values flatten into calldata felts in field order.
#[test]
fn test_flatten_struct_records_into_calldata() {
    let abi = load_abi();
    let mut registry = StructRegistry::new(&abi).expect("build struct registry");
    let uint256 = registry.get_contract_struct("Uint256").expect("schema");

    let amount = Record::new(&uint256, vec![CallValue::from(1000u64), CallValue::from(0u64)])
        .expect("build record");
    assert_eq!(amount.get("low"), Some(&CallValue::Felt(Felt::from(1000u64))));

    // transfer(recipient, amount) calldata: recipient then the two limbs.
    let calldata_value = CallValue::Array(vec![
        CallValue::from(0xca11ab1eu64),
        CallValue::from(amount),
    ]);
    let calldata = flatten("calldata", &calldata_value).expect("flatten");
    assert_eq!(
        calldata,
        vec![
            Felt::from(0xca11ab1eu64),
            Felt::from(1000u64),
            Felt::from(0u64),
        ]
    );
}

/// Nesting past the depth budget is rejected instead of recursing forever.
#[test]
fn test_flatten_depth_budget_is_enforced() {
    let mut value = CallValue::from(1u64);
    for _ in 0..DEFAULT_MAX_DEPTH {
        value = CallValue::Array(vec![value]);
    }
    let err = flatten("payload", &value).expect_err("should exceed depth");
    match err {
        RegistryError::MaxDepthExceeded { argument } => assert_eq!(argument, "payload"),
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Unknown identifiers fail with lookup errors naming the key.
#[test]
fn test_unknown_lookups_are_rejected() {
    let abi = load_abi();
    let mut structs = StructRegistry::new(&abi).expect("build struct registry");
    let mut events = EventRegistry::new(&abi);

    let err = structs.get_contract_struct("Uint512").expect_err("unknown");
    assert_eq!(err.to_string(), "Struct Uint512 is not defined.");

    let err = events.get_contract_event("Burn").expect_err("unknown");
    assert_eq!(err.to_string(), "Event Burn is not defined.");

    let stray = get_selector_from_name("Burn");
    let err = events.get_contract_event(stray).expect_err("unknown");
    assert!(matches!(
        err,
        RegistryError::UnknownSelector { selector } if selector == stray
    ));
}

/// A failed lookup leaves previously cached entries intact.
#[test]
fn test_registries_stay_usable_after_errors() {
    let abi = load_abi();
    let mut events = EventRegistry::new(&abi);

    let before = events.get_contract_event("Approval").expect("schema");
    events.get_contract_event("Burn").expect_err("unknown");
    let after = events.get_contract_event("Approval").expect("schema");
    assert!(Arc::ptr_eq(&before, &after));
}
