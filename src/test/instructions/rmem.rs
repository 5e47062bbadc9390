use super::*;

#[test]
fn reads_from_memory_address() {
    // address 5 holds 999; RMEM R0 5; HALT
    let (processor, _) = run_ok(&[15, 32768, 5, 0, 0, 999], &[]);
    assert_eq!(processor.register(0), 999);
}

#[test]
fn reads_address_given_by_register() {
    let (processor, _) = run_ok(
        &[
            1, 32769, 8, // SET R1 8
            15, 32768, 32769, // RMEM R0 R1
            0, // HALT
            0, 777, // word 8 == 777
        ],
        &[],
    );
    assert_eq!(processor.register(0), 777);
}
