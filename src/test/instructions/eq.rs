use super::*;

#[test]
fn equal_values_set_one() {
    let (processor, _) = run_ok(&[4, 32768, 3, 3, 0], &[]);
    assert_eq!(processor.register(0), 1);
}

#[test]
fn unequal_values_set_zero() {
    let (processor, _) = run_ok(&[4, 32768, 3, 4, 0], &[]);
    assert_eq!(processor.register(0), 0);
}
