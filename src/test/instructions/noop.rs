use super::*;

#[test]
fn has_no_effect_and_advances_pc() {
    let (processor, _) = run_ok(&[21, 21, 21, 0], &[]);
    assert_eq!(processor.register(0), 0);
    assert_eq!(processor.state(), State::Halted);
}
