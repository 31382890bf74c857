//! Property-based tests for client identifiers

use conntree_core::{ClientIdentifier, ClientIdentifierType};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = ClientIdentifierType> {
    prop_oneof![
        Just(ClientIdentifierType::Connection),
        Just(ClientIdentifierType::ConnectionGroup),
        Just(ClientIdentifierType::ActiveConnection),
    ]
}

proptest! {
    #[test]
    fn encoded_identifiers_decode_to_the_same_value(
        id in "[^\\x00]{0,24}",
        data_source in "[a-z][a-z0-9-]{0,15}",
        kind in arb_kind(),
    ) {
        let identifier = ClientIdentifier::new(data_source, kind, id);
        let decoded: ClientIdentifier = identifier.to_string().parse().unwrap();
        prop_assert_eq!(decoded, identifier);
    }

    #[test]
    fn lenient_parse_never_fails(value in "\\PC{0,32}") {
        let parsed = ClientIdentifier::parse_lenient(&value);
        if ClientIdentifier::decode(&value).is_err() {
            prop_assert_eq!(parsed.id, value);
            prop_assert_eq!(parsed.kind, ClientIdentifierType::Connection);
            prop_assert_eq!(parsed.data_source, "default");
        }
    }
}
