use super::*;

#[test]
fn bitwise_and() {
    let (processor, _) = run_ok(&[12, 32768, 0b1100, 0b1010, 0], &[]);
    assert_eq!(processor.register(0), 0b1000);
}
