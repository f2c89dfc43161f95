//! Benchmarks for term construction and rendering.
//!
//! Benchmark groups:
//! - `build_*`: operator overloads with coercion, no printing
//! - `render_*`: canonical, infix, and SMT-LIB text of a prebuilt tree

use criterion::{Criterion, criterion_group, criterion_main};
use smtkit_smtlib::{Script, Term, TermResult};

/// Left-leaning chain `((x0 + x1) * x2) - x3 ...` mixing Int and Real
/// variables and literals.
fn build_chain(len: usize) -> TermResult<Term> {
    let mut acc = Term::int("x0");
    for i in 1..len {
        let next = if i % 3 == 0 {
            Term::real(format!("x{i}"))
        } else {
            Term::int(format!("x{i}"))
        };
        acc = match i % 4 {
            0 => (&acc + &next)?,
            1 => (&acc * &next)?,
            2 => (&acc - 2.5)?,
            _ => (-&acc)?,
        };
    }
    Ok(acc)
}

fn bench_build_chain(c: &mut Criterion) {
    c.bench_function("build_chain_256", |b| {
        b.iter(|| build_chain(256));
    });
}

fn bench_render_canonical(c: &mut Criterion) {
    let Ok(term) = build_chain(256) else { return };
    c.bench_function("render_canonical_256", |b| {
        b.iter(|| term.to_canonical());
    });
}

fn bench_render_infix(c: &mut Criterion) {
    let Ok(term) = build_chain(256) else { return };
    c.bench_function("render_infix_256", |b| {
        b.iter(|| term.to_infix());
    });
}

fn bench_render_script(c: &mut Criterion) {
    let Ok(term) = build_chain(256) else { return };
    let Ok(assertion) = term.ge(0) else { return };
    c.bench_function("render_script_256", |b| {
        b.iter(|| Script::from_assertions([&assertion]).to_string());
    });
}

criterion_group!(build_benches, bench_build_chain);

criterion_group!(
    render_benches,
    bench_render_canonical,
    bench_render_infix,
    bench_render_script,
);

criterion_main!(build_benches, render_benches);
