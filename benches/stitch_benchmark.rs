//! Benchmarks for pdfstitch extraction and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic layout dumps where every page ends in a
//! table that continues on the next page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfstitch::{
    BoundingBox, CellGrid, DetectedTable, ExtractOptions, LayoutDump, PageLayout,
    RenderOptions, TableFormat,
};

/// Creates a layout dump with the given number of pages.
fn create_test_dump(page_count: usize) -> LayoutDump {
    let mut dump = LayoutDump::new();

    for page in 0..page_count {
        let rows: Vec<[String; 3]> = (0..20)
            .map(|r| {
                [
                    format!("item {}-{}", page, r),
                    format!("{}", r * 100),
                    "비고\n메모".to_string(),
                ]
            })
            .collect();

        dump.add_page(
            PageLayout::letter()
                .with_line(10.0, 22.0, format!("Heading of page {}", page + 1))
                .with_line(30.0, 42.0, "Some introductory prose for the table.")
                .with_table(DetectedTable::new(
                    BoundingBox::new(40.0, 400.0, 570.0, 792.0),
                    CellGrid::from_strings(rows.clone()),
                ))
                .with_table(DetectedTable::new(
                    BoundingBox::new(40.0, 60.0, 570.0, 300.0),
                    CellGrid::from_strings(rows),
                ))
                .with_line(320.0, 332.0, "Notes between tables."),
        );
    }

    dump
}

/// Benchmark input detection.
fn bench_format_detection(c: &mut Criterion) {
    let json = create_test_dump(1).to_json().unwrap().into_bytes();
    let pdf_header = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";

    c.bench_function("detect_layout_dump", |b| {
        b.iter(|| pdfstitch::detect_format_from_bytes(black_box(&json)).unwrap());
    });

    c.bench_function("detect_pdf_header", |b| {
        b.iter(|| pdfstitch::detect_format_from_bytes(black_box(pdf_header)).unwrap());
    });
}

/// Benchmark linearization and merging at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for page_count in [1, 10, 50].iter() {
        let dump = create_test_dump(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| pdfstitch::extract_backend(black_box(&dump), &ExtractOptions::default()));
        });
    }

    group.finish();
}

/// Benchmark serialization in both table formats.
fn bench_serialization(c: &mut Criterion) {
    let dump = create_test_dump(10);
    let doc = pdfstitch::extract_backend(&dump, &ExtractOptions::default()).unwrap();

    let mut group = c.benchmark_group("serialization");
    for format in [TableFormat::Ascii, TableFormat::Html] {
        let options = RenderOptions::new().with_table_format(format);
        group.bench_function(format!("{:?}", format).to_lowercase(), |b| {
            b.iter(|| pdfstitch::render::to_text(black_box(&doc), &options));
        });
    }
    group.finish();
}

/// Benchmark the ASCII-to-HTML retrofit.
fn bench_retrofit(c: &mut Criterion) {
    let dump = create_test_dump(10);
    let doc = pdfstitch::extract_backend(&dump, &ExtractOptions::default()).unwrap();
    let ascii = pdfstitch::render::to_text(
        &doc,
        &RenderOptions::new().with_table_format(TableFormat::Ascii),
    );

    c.bench_function("retrofit_10_pages", |b| {
        b.iter(|| pdfstitch::convert_ascii_tables_to_html(black_box(&ascii)));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_extraction,
    bench_serialization,
    bench_retrofit,
);
criterion_main!(benches);
