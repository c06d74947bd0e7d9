use criterion::{Criterion, black_box, criterion_group, criterion_main};

use codici::banking::{format_iban, iban_check_digits, is_valid_iban};
use codici::piva::{is_valid_partita_iva, partita_iva_check_digit};

const IBAN_IT: &str = "IT60X0542811101000000123456";
// 34 characters, the longest IBAN shape accepted
const IBAN_MAX: &str = "IT43X05428111010000001234567890ABC";
const PIVA: &str = "IT12345678903";

fn bench_iban_validate(c: &mut Criterion) {
    c.bench_function("iban_validate_it", |b| {
        b.iter(|| is_valid_iban(black_box(IBAN_IT)))
    });
    c.bench_function("iban_validate_34_chars", |b| {
        b.iter(|| is_valid_iban(black_box(IBAN_MAX)))
    });
}

fn bench_iban_format(c: &mut Criterion) {
    c.bench_function("iban_format", |b| {
        b.iter(|| format_iban(black_box(IBAN_IT)).unwrap())
    });
}

fn bench_iban_check_digits(c: &mut Criterion) {
    c.bench_function("iban_check_digits", |b| {
        b.iter(|| iban_check_digits(black_box("IT"), black_box("X0542811101000000123456")).unwrap())
    });
}

fn bench_piva(c: &mut Criterion) {
    c.bench_function("piva_validate", |b| {
        b.iter(|| is_valid_partita_iva(black_box(PIVA)))
    });
    c.bench_function("piva_check_digit", |b| {
        b.iter(|| partita_iva_check_digit(black_box("1234567890")).unwrap())
    });
}

criterion_group!(
    benches,
    bench_iban_validate,
    bench_iban_format,
    bench_iban_check_digits,
    bench_piva,
);
criterion_main!(benches);
