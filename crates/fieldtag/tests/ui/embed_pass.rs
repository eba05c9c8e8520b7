use fieldtag::prelude::*;

#[derive(Default, Record)]
struct Base {
    #[tag = r#"json:"id""#]
    id: u64,
}

#[derive(Default, Record)]
struct Wrapper {
    #[embed]
    #[tag = r#"default:"0""#]
    base: Base,
    note: Option<String>,
}

fn main() {
    let model = <Wrapper as RecordSchema>::MODEL;
    assert_eq!(model.fields.len(), 2);
    assert!(matches!(model.fields[0].kind, FieldKind::Embedded(_)));

    let value = Wrapper::default();
    let set = fieldtag::build(&value).unwrap();
    assert_eq!(set.value_as::<u64>("id"), Ok(&0));
    assert!(set.value("note").is_ok());
}
