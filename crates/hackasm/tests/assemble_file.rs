use std::fs;

#[test]
fn assembles_a_file_with_loop_and_variables_to_sibling_hack_file() {
    let dir = tempfile::tempdir().unwrap();
    let asm_path = dir.path().join("Sum.asm");
    fs::write(
        &asm_path,
        "// adds 1..=100 into sum\n\
         @i\nM=1\n\
         @sum\nM=0\n\
         (LOOP)\n\
         @i\nD=M\n\
         @100\nD=D-A\n\
         @END\nD;JGT\n\
         @i\nD=M\n\
         @sum\nM=D+M\n\
         @i\nM=M+1\n\
         @LOOP\n0;JMP\n\
         (END)\n\
         @END\n0;JMP\n",
    )
    .unwrap();

    let hack_path = hackasm::assemble_file(&asm_path).unwrap();
    assert_eq!(hack_path, dir.path().join("Sum.hack"));

    let hack = fs::read_to_string(&hack_path).unwrap();
    let lines: Vec<&str> = hack.lines().collect();
    assert!(!lines.is_empty());
    for line in &lines {
        assert_eq!(line.len(), 16);
        assert!(line.chars().all(|c| c == '0' || c == '1'));
    }
    // @i and @sum are the first two variables seen, in that order.
    assert_eq!(lines[0], format!("0{:015b}", 16u16));
    assert_eq!(lines[2], format!("0{:015b}", 17u16));
}

#[test]
fn reassembling_the_same_source_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let asm_path = dir.path().join("Prog.asm");
    fs::write(&asm_path, "@0\nD=A\n@1\nD=D+A\n@2\nM=D\n").unwrap();

    let hack_path_1 = hackasm::assemble_file(&asm_path).unwrap();
    let first = fs::read_to_string(&hack_path_1).unwrap();
    let hack_path_2 = hackasm::assemble_file(&asm_path).unwrap();
    let second = fs::read_to_string(&hack_path_2).unwrap();

    assert_eq!(first, second);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let asm_path = dir.path().join("Commented.asm");
    fs::write(
        &asm_path,
        "// full line comment\n\n@5 // trailing comment\nD=A\n\n",
    )
    .unwrap();

    let hack_path = hackasm::assemble_file(&asm_path).unwrap();
    let hack = fs::read_to_string(&hack_path).unwrap();
    let lines: Vec<&str> = hack.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("0{:015b}", 5u16));
}
