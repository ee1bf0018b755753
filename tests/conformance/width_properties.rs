//! Width Properties
//!
//! A fixed-width integer either nests at exactly its width and decodes back
//! to itself, or is refused at construction.

use crate::test_utils::*;
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

fn int_fits(v: i64, width: usize) -> bool {
    let bound = 1i128 << (8 * width - 1);
    (-bound..bound).contains(&i128::from(v))
}

proptest! {
    #[test]
    fn test_fixed_int_nests_at_width_or_is_refused(v in any::<i64>(), width in 1usize..=8) {
        match Encodable::int(v, Width::Fixed(width)) {
            Ok(e) => {
                prop_assert!(int_fits(v, width));
                let nest = e.to_nest_bytes();
                prop_assert_eq!(nest.len(), width);
                prop_assert_eq!(dec::int(Width::Fixed(width)).from_nest(&nest), Ok(BigInt::from(v)));
            }
            Err(err) => {
                prop_assert!(!int_fits(v, width));
                prop_assert!(matches!(err, Error::ValueOutOfRange { .. }), "{:?}", err);
            }
        }
    }

    #[test]
    fn test_fixed_uint_nests_at_width_or_is_refused(v in any::<u64>(), width in 1usize..=8) {
        let fits = width == 8 || v < (1u64 << (8 * width));
        match Encodable::uint(v, Width::Fixed(width)) {
            Ok(e) => {
                prop_assert!(fits);
                let nest = e.to_nest_bytes();
                prop_assert_eq!(nest.len(), width);
                prop_assert_eq!(dec::uint(Width::Fixed(width)).from_nest(&nest), Ok(BigUint::from(v)));
            }
            Err(err) => {
                prop_assert!(!fits);
                prop_assert!(matches!(err, Error::ValueOutOfRange { .. }), "{:?}", err);
            }
        }
    }
}
