use super::*;

#[test]
fn not_zero_is_all_fifteen_bits() {
    let (processor, _) = run_ok(&[14, 32768, 0, 0], &[]);
    assert_eq!(processor.register(0), 32767);
}

#[test]
fn not_max_is_zero() {
    let (processor, _) = run_ok(&[14, 32768, 32767, 0], &[]);
    assert_eq!(processor.register(0), 0);
}

#[test]
fn never_sets_bit_fifteen() {
    for b in [0u16, 1, 255, 32767] {
        let (processor, _) = run_ok(&[14, 32768, b, 0], &[]);
        assert_eq!(processor.register(0) & 0x8000, 0);
    }
}
