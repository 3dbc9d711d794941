use hllpp::{HyperLogLogPlus, Result};

fn main() -> Result<()> {
    let mut counter1 = HyperLogLogPlus::new(14)?;
    for i in 0..10 {
        counter1.insert(&i);
    }
    println!("counter1 estimate = {}", counter1.estimate()?);

    let mut counter2 = HyperLogLogPlus::new(14)?;
    for i in 10..15 {
        counter2.insert(&i);
    }
    println!("counter2 estimate = {}", counter2.estimate()?);

    counter1.merge(&counter2)?;
    println!("merged estimate = {}", counter1.estimate()?);
    println!("merged counter = {:?}", counter1);

    Ok(())
}
