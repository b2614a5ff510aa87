//! Normalizes a few joystick and sensor readings and maps them back.

use rescale_math::{Bounds, DivisionByZero, denormalize, normalize};

fn main() -> Result<(), DivisionByZero> {
    // Raw 12-bit ADC reading from a potentiometer.
    let (adc_min, adc_max) = (0.0, 4095.0);

    for raw in [0.0, 1024.0, 2047.5, 4095.0, 5000.0] {
        let unit = normalize(raw, adc_min, adc_max)?;
        println!("adc {raw:>7.1} -> {unit:>7.4} -> {:>7.1}", denormalize(unit, adc_min, adc_max)?);
    }

    let celsius = Bounds::new(0.0, 100.0)?;
    let fahrenheit = Bounds::new(32.0, 212.0)?;

    for temp in [-40.0, 0.0, 37.0, 100.0] {
        println!("{temp:>6.1} C = {:>6.1} F", fahrenheit.rescale(temp, celsius));
    }

    match normalize(1.0, 3.0, 3.0) {
        Ok(value) => println!("unexpected: {value}"),
        Err(err) => println!("degenerate range: {err}"),
    }

    Ok(())
}
