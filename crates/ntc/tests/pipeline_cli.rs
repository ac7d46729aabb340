use std::fs;

#[test]
fn full_pipeline_without_bootstrap_omits_sys_init_call() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Main.jack"),
        "class Main {\n\
         \tfunction void main() {\n\
         \t\tdo Output.printInt(42);\n\
         \t\treturn;\n\
         \t}\n\
         }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Output.jack"),
        "class Output {\n\
         \tfunction void printInt(int n) {\n\
         \t\treturn;\n\
         \t}\n\
         }\n",
    )
    .unwrap();

    let result = ntc::run(dir.path(), false).unwrap();
    assert_eq!(result.vm_files.len(), 2);

    let asm = fs::read_to_string(&result.asm_file).unwrap();
    assert!(!asm.contains("@Sys.init"));
    assert!(asm.contains("call Output.printInt 1"));

    let hack = fs::read_to_string(&result.hack_file).unwrap();
    assert!(!hack.is_empty());
    for line in hack.lines() {
        assert_eq!(line.len(), 16);
    }
}

#[test]
fn config_file_bootstrap_setting_is_honored_without_a_cli_override() {
    use ntc::NtcConfig;

    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Main.jack"),
        "class Main { function void main() { return; } }",
    )
    .unwrap();

    let mut config = NtcConfig::from_toml("bootstrap = true\n").unwrap();
    config.merge_cli_override(None);
    assert_eq!(config.bootstrap, Some(true));

    let result = ntc::run(dir.path(), config.bootstrap.unwrap()).unwrap();
    let asm = fs::read_to_string(&result.asm_file).unwrap();
    assert!(asm.contains("@Sys.init"));
}
