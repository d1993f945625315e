//! Benchmarks for axiom writing, listing and lookup.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use owl_translate::config::TranslateConfig;
use owl_translate::graph::Iri;
use owl_translate::model::{Axiom, AxiomBody, AxiomKind, ClassExpression, ObjectPropertyExpression};
use owl_translate::ontology::Ontology;

fn ex(local: impl std::fmt::Display) -> Iri {
    Iri::new(format!("http://ex.org/{local}"))
}

fn domain(n: usize) -> Axiom {
    Axiom::new(AxiomBody::ObjectPropertyDomain {
        property: ObjectPropertyExpression::Property(ex(format!("p{n}"))),
        domain: ClassExpression::Class(ex(format!("C{n}"))),
    })
}

fn disjoint(n: usize) -> Axiom {
    Axiom::new(AxiomBody::DisjointClasses {
        members: (0..4).map(|i| ClassExpression::Class(ex(format!("D{n}_{i}")))).collect(),
    })
}

fn populated(size: usize) -> Ontology {
    let ontology = Ontology::in_memory(TranslateConfig::default());
    for n in 0..size {
        ontology.add_axiom(&domain(n)).unwrap();
        ontology.add_axiom(&disjoint(n)).unwrap();
    }
    ontology
}

fn bench_write(c: &mut Criterion) {
    c.bench_function("write_200_axioms", |bench| {
        bench.iter(|| black_box(populated(100)))
    });
}

fn bench_list(c: &mut Criterion) {
    let ontology = populated(500);
    c.bench_function("list_domains_500", |bench| {
        bench.iter(|| black_box(ontology.axioms(AxiomKind::ObjectPropertyDomain).unwrap()))
    });
    c.bench_function("list_disjoint_collections_500", |bench| {
        bench.iter(|| black_box(ontology.axioms(AxiomKind::DisjointClasses).unwrap()))
    });
}

fn bench_find(c: &mut Criterion) {
    let ontology = populated(500);
    let keyed = domain(250);
    let unkeyed = disjoint(250);
    c.bench_function("find_with_search_key", |bench| {
        bench.iter(|| black_box(ontology.contains_axiom(&keyed).unwrap()))
    });
    c.bench_function("find_by_full_listing", |bench| {
        bench.iter(|| black_box(ontology.contains_axiom(&unkeyed).unwrap()))
    });
}

criterion_group!(benches, bench_write, bench_list, bench_find);
criterion_main!(benches);
