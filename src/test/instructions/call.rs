use super::*;

#[test]
fn pushes_return_address_and_jumps() {
    // CALL 4; HALT (unreached); word 4: OUT 65; HALT
    let (processor, io) = run_ok(&[17, 4, 0, 0, 19, 65, 0], &[]);
    assert_eq!(io.output, vec![65]);
    // The return address (pc + 1 + arity at the call site) is left on the
    // stack since this program never executes RET.
    assert_eq!(processor.stack(), &[2]);
}

#[test]
fn return_address_is_instruction_after_call() {
    // CALL 5; OUT 90 ('Z'); HALT; word 5: RET (jumps back to the OUT).
    let (_, io) = run_ok(&[17, 5, 19, 90, 0, 18], &[]);
    assert_eq!(io.output, vec![90]);
}
