/// Seed drawn from JavaScript's Math.random, one byte per call
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn js_seeds_differ_between_calls() {
        let seeds: [u64; 4] = core::array::from_fn(|_| js_random_seed());
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
