use std::error::Error;

use weft::Matrix;

#[cfg(feature = "trace")]
fn init_tracing() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::layer::SubscriberExt;

    let subscriber = tracing_subscriber::registry().with(tracing_tracy::TracyLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "trace")]
    init_tracing()?;

    let mut m = Matrix::<f64>::new(3, 2)?;
    let mut m2 = Matrix::<f64>::new(2, 1)?;

    m.set(0, 0, 1.0)?;
    m.set(1, 0, 1.0)?;
    m.set(2, 0, 1.0)?;
    m2.set(0, 0, 2.0)?;

    let m3 = m.dot(&m2)?;
    m3.print();

    let m4 = m3.transpose();
    m4.print();

    let mut m5 = Matrix::<f64>::new(1, 3)?;
    m5.set(0, 0, 1.0)?;
    m5.set(0, 1, 1.0)?;
    m5.set(0, 2, 1.0)?;

    let m6 = m5.add(&m4)?;
    m6.print();

    let values = [1.0, 2.0, 3.0, 4.0];
    let m7 = Matrix::from_slice(2, 2, &values)?;
    m7.print();

    let m8 = m7.slice(1, 2, 1, 2)?;
    m8.print();

    if let Err(err) = m7.dot(&m) {
        println!("{err}");
    }

    Ok(())
}
