use criterion::criterion_main;

mod enumerate;
mod indexed;

criterion_main!(indexed::benches, enumerate::benches);
