use std::fs;

#[test]
fn compiles_every_jack_file_in_a_directory_to_a_sibling_vm_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Main.jack"),
        "class Main {\n\
         \tfunction void main() {\n\
         \t\tvar int x;\n\
         \t\tlet x = 1 + 2;\n\
         \t\treturn;\n\
         \t}\n\
         }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Foo.jack"),
        "class Foo {\n\
         \tfield int value;\n\
         \tconstructor Foo new() {\n\
         \t\tlet value = 0;\n\
         \t\treturn this;\n\
         \t}\n\
         \tmethod int get() {\n\
         \t\treturn value;\n\
         \t}\n\
         }\n",
    )
    .unwrap();

    let compiled = jackc::compile_dir(dir.path()).unwrap();
    assert_eq!(compiled.len(), 2);
    for vm_path in &compiled {
        assert!(vm_path.exists());
        assert_eq!(vm_path.extension().unwrap(), "vm");
    }

    let main_vm = fs::read_to_string(dir.path().join("Main.vm")).unwrap();
    assert!(main_vm.contains("function Main.main 1"));
    assert!(main_vm.contains("push constant 1"));
    assert!(main_vm.contains("push constant 2"));
    assert!(main_vm.contains("add"));

    let foo_vm = fs::read_to_string(dir.path().join("Foo.vm")).unwrap();
    assert!(foo_vm.contains("function Foo.new 0"));
    assert!(foo_vm.contains("call Memory.alloc 1"));
    assert!(foo_vm.contains("function Foo.get 0"));
    assert!(foo_vm.contains("push argument 0"));
    assert!(foo_vm.contains("pop pointer 0"));
}

#[test]
fn rejects_a_directory_with_no_jack_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(jackc::compile_dir(dir.path()).is_err());
}

#[test]
fn reports_malformed_source_with_the_offending_file_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Broken.jack"), "class Broken {").unwrap();

    let err = jackc::compile_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Broken.jack"));
}
