//! Walk through the four operations on a small document.
//!
//! Run:  cargo run --example corgi -p deep-property

use deep_property::{
    extract, extract_deep_property, get, get_deep_property, has, has_deep_property, set,
    set_deep_property, InvalidPathError, Record,
};
use serde_json::{json, Value};

fn main() -> Result<(), InvalidPathError> {
    let mut data = Record::new();

    // Dot paths and key lists are interchangeable.
    set(&mut data, "name", "Pembroke Welsh Corgi")?;
    set(&mut data, "traits.coat.length", "medium")?;
    set(&mut data, ["traits", "coat", "thickness"], "thick")?;
    set(&mut data, "traits.lifeSpan", json!([12, 15]))?;

    println!("{}", get(&data, ["traits", "coat", "length"])?);
    println!("{}", get(&data, "traits.coat.thickness")?);

    println!("{}", has(&data, "traits.coat.thickness")?);
    println!("{}", has(&data, "traits.weight")?);

    println!("{:?}", extract(&data, "traits.coat.length")?);
    println!("{:?}", extract(&data, "traits.weight")?);

    set_deep_property(&mut data, "traits.butt.cuteness", "very")?;
    println!("{}", has_deep_property(&data, "traits.butt.cuteness")?);
    println!("{}", get_deep_property(&data, "traits.butt.cuteness")?);
    println!("{:?}", extract_deep_property(&data, "traits.butt.cuteness")?);

    println!("{:#}", Value::Object(data));
    Ok(())
}
