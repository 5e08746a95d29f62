use std::io::Write;
use rand_xs1024::*;

// Writes the raw output stream to stdout as little-endian bytes,
// for piping into external test batteries such as PractRand:
// cargo run --release | RNG_test stdin64

fn main() -> std::io::Result<()> {

    let mut rnd = Xs1024::from_u64(37134)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    //let mut rnd = Xs1024::new();
    let mut stdout = std::io::stdout().lock();

    let mut v: Vec<u8> = Vec::with_capacity(0x10000);

    loop {
        let z = rnd.next_u64();
        // Low 32 bits only, to test next_u32.
        //let z = rnd.next_u32();

        v.extend_from_slice(&z.to_le_bytes());

        if v.len() >= 0x10000 {
            stdout.write_all(v.as_slice())?;
            v.clear();
        }
    }
}
