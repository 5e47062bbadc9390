use super::*;

#[test]
fn remainder_of_two_values() {
    let (processor, _) = run_ok(&[11, 32768, 7, 3, 0], &[]);
    assert_eq!(processor.register(0), 1);
}

#[test]
fn zero_divisor_faults() {
    run_to(&[11, 32768, 7, 0, 0], &[], Err(ErrorKind::DivisionByZero));
}
