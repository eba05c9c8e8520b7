use fieldtag::{impl_field, prelude::*};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Celsius(f64);

impl_field!(Celsius);

#[derive(Default, Record)]
struct Reading {
    #[ident = "TempC"]
    temp: Celsius,
    #[tag = r#"json:"-""#]
    raw: Vec<u8>,
}

fn main() {
    let mut value = Reading::default();
    let mut set = fieldtag::build_mut(&mut value).unwrap();
    set.set("temp_c", Celsius(21.5)).unwrap();
    drop(set);

    assert_eq!(value.temp, Celsius(21.5));
}
