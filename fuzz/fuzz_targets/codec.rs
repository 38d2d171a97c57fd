#![no_main]

extern crate libfuzzer_sys;
extern crate made_hand;

use libfuzzer_sys::fuzz_target;
use made_hand::core::MadeHand;

fuzz_target!(|data: &[u8]| {
    // Gaps between alternates close up, after that encoding is stable.
    if let Ok(hand) = MadeHand::from_bytes(data) {
        let bytes = hand.to_bytes();
        let again = MadeHand::from_bytes(&bytes).unwrap();
        assert_eq!(hand, again);
        assert_eq!(bytes, again.to_bytes());
    }
});
