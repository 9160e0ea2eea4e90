use csrmat::config::MulOptions;
use csrmat::context::MulContext;
use csrmat::{DenseMatrix, SparseMatrix};
use rand::Rng;

fn main() -> Result<(), csrmat::MatError> {
    // a 4x5 matrix with a handful of non-zeros
    let a = DenseMatrix::<f64, 4, 5>::from_slice(&[
        0.0, 0.0, 0.0, 0.0, 0.0, //
        5.0, 8.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 2.0, 0.0, 6.0,
    ])?;
    let s = SparseMatrix::from_dense(&a);
    println!("nnz = {}", s.nnz());
    println!("values = {:?}", s.values());
    println!("columns = {:?}", s.columns());
    println!("row_offsets = {:?}", s.row_offsets());
    println!("transpose =\n{}", s.transpose().to_dense());

    // random right-hand side
    let mut rng = rand::thread_rng();
    let b = DenseMatrix::<f64, 5, 3>::from_fn(|_, _| rng.gen_range(-1.0..1.0));

    let sparse_product = &s * &b;
    // e.g. `cargo run --example sparse_roundtrip -- -mult_type blocked -block_size 2`
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = MulOptions::from_args(&args)?;
    let ctx = MulContext::new(opts);
    let dense_product = ctx.multiply(&a, &b);
    println!("C (csr) =\n{sparse_product}");
    println!("C ({}) =\n{dense_product}", ctx.kind());
    Ok(())
}
