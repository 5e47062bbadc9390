use super::*;

#[test]
fn sums_two_values() {
    let (processor, _) = run_ok(&[9, 32768, 2, 3, 0], &[]);
    assert_eq!(processor.register(0), 5);
}

#[test]
fn wraps_modulo_32768() {
    let (processor, _) = run_ok(&[9, 32768, 32767, 1, 0], &[]);
    assert_eq!(processor.register(0), 0);
}
