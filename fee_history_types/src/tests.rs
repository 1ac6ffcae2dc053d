mod nat256 {
    use crate::Nat256;
    use candid::{Decode, Encode, Nat};
    use num_bigint::BigUint;
    use proptest::{arbitrary::any, prelude::Strategy, proptest};

    proptest! {
        #[test]
        fn should_encode_like_nat(u256 in arb_u256()) {
            let nat = Nat::from(u256);
            let nat256 = Nat256::try_from(nat.clone()).unwrap();

            assert_eq!(Encode!(&nat).unwrap(), Encode!(&nat256).unwrap());
            assert_eq!(Decode!(&Encode!(&nat).unwrap(), Nat256).unwrap(), nat256);
        }

        #[test]
        fn should_reject_nat_overflowing_a_u256(offset in 1_u64..) {
            let u256_max = BigUint::from_bytes_be(&[0xff; 32]);
            assert!(Nat256::try_from(Nat::from(u256_max.clone())).is_ok());

            let overflow = Nat::from(u256_max + BigUint::from(offset));
            assert_eq!(
                Nat256::try_from(overflow),
                Err("Nat does not fit in a U256".to_string())
            );
        }

        #[test]
        fn should_keep_value_through_be_bytes(value in any::<u128>()) {
            let nat256 = Nat256::from(value);
            let bytes = nat256.clone().into_be_bytes();

            assert_eq!(u128::from_be_bytes(bytes[16..].try_into().unwrap()), value);
            assert_eq!(Nat256::from_be_bytes(bytes), nat256);
        }
    }

    #[test]
    fn should_convert_zero() {
        assert_eq!(Nat256::from(0_u64).into_be_bytes(), [0_u8; 32]);
        assert_eq!(Nat256::from_be_bytes([0_u8; 32]), Nat256::from(0_u8));
    }

    fn arb_u256() -> impl Strategy<Value = BigUint> {
        use proptest::array::uniform32;
        uniform32(any::<u8>()).prop_map(|value| BigUint::from_bytes_be(&value))
    }
}

mod hash {
    use crate::Hash;
    use assert_matches::assert_matches;

    #[test]
    fn should_parse_and_display() {
        let text = "0x5618f72c485bd98a3df58d900eabe9e24bfaa972a6fe5227e02233fad2db1154";
        let hash: Hash = text.parse().unwrap();
        assert_eq!(hash.to_string(), text);
        assert_eq!(serde_json::to_string(&hash).unwrap(), format!("\"{}\"", text));
        assert_eq!(
            serde_json::from_str::<Hash>(&format!("\"{}\"", text)).unwrap(),
            hash
        );
    }

    #[test]
    fn should_reject_malformed_strings() {
        assert_matches!(
            "5618f72c485bd98a3df58d900eabe9e24bfaa972a6fe5227e02233fad2db1154".parse::<Hash>(),
            Err(e) if e.contains("doesn't start with 0x")
        );
        assert_matches!(
            "0x5618".parse::<Hash>(),
            Err(e) if e.contains("expected 64 characters, got 4")
        );
        assert_matches!(
            format!("0x{}", "zz".repeat(32)).parse::<Hash>(),
            Err(e) if e.starts_with("Invalid hex string")
        );
    }
}

mod fee_history {
    use crate::{FeeHistory, Nat256};

    #[test]
    fn should_omit_reward_when_absent() {
        let history = FeeHistory {
            oldest_block: Nat256::from(5_u64),
            base_fee_per_gas: vec![Nat256::from(7_u64), Nat256::from(8_u64)],
            gas_used_ratio: vec![0.5],
            reward: None,
        };
        let json = serde_json::to_value(&history).unwrap();

        assert!(json.get("reward").is_none());
        assert!(json.get("oldestBlock").is_some());
        assert_eq!(json["gasUsedRatio"], serde_json::json!([0.5]));
    }
}
