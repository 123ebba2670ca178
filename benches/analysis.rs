use criterion::{black_box, criterion_group, criterion_main, Criterion};

use molsketch::{
    connectivity_signature, detect_functional_groups, identify, mol_formula, molecule_to_prompt,
    parse_description, Mol,
};

const GLYCINE: &str = r#"{
    "atoms": [
        {"element": "N", "x": 180, "y": 200}, {"element": "C", "x": 300, "y": 200},
        {"element": "C", "x": 420, "y": 200}, {"element": "O", "x": 480, "y": 140},
        {"element": "O", "x": 480, "y": 260}, {"element": "H", "x": 540, "y": 320},
        {"element": "H", "x": 120, "y": 140}, {"element": "H", "x": 120, "y": 260},
        {"element": "H", "x": 300, "y": 140}, {"element": "H", "x": 300, "y": 260}
    ],
    "bonds": [
        {"from": 0, "to": 1}, {"from": 1, "to": 2}, {"from": 2, "to": 3, "order": 2},
        {"from": 2, "to": 4}, {"from": 4, "to": 5}, {"from": 0, "to": 6},
        {"from": 0, "to": 7}, {"from": 1, "to": 8}, {"from": 1, "to": 9}
    ]
}"#;

/// A saturated n-carbon chain with a hydroxyl on the last carbon.
fn alcohol(n: usize) -> Mol {
    let mut mol = Mol::new();
    let carbons: Vec<_> = (0..n)
        .map(|i| mol.add_atom("C", i as f64 * 30.0, 0.0))
        .collect();
    for pair in carbons.windows(2) {
        mol.add_bond(pair[0], pair[1], molsketch::BondOrder::Single).unwrap();
    }
    let o = mol.add_atom("O", n as f64 * 30.0, 0.0);
    mol.add_bond(carbons[n - 1], o, molsketch::BondOrder::Single).unwrap();
    let h = mol.add_atom("H", n as f64 * 30.0, 30.0);
    mol.add_bond(o, h, molsketch::BondOrder::Single).unwrap();
    for &c in &carbons {
        while molsketch::remaining_capacity(&mol, c) > 0 {
            let h = mol.add_atom("H", 0.0, 0.0);
            mol.add_bond(c, h, molsketch::BondOrder::Single).unwrap();
        }
    }
    mol
}

fn bench_load(c: &mut Criterion) {
    let desc = parse_description(GLYCINE).unwrap();
    c.bench_function("load/glycine", |b| {
        b.iter(|| {
            let mut mol = Mol::new();
            black_box(mol.load(black_box(&desc)))
        })
    });
}

fn bench_derive(c: &mut Criterion) {
    let mut glycine = Mol::new();
    glycine.load_json(GLYCINE).unwrap();
    let decanol = alcohol(10);

    let mut group = c.benchmark_group("derive");
    for (name, mol) in [("glycine", &glycine), ("decanol", &decanol)] {
        group.bench_function(format!("formula/{name}"), |b| {
            b.iter(|| black_box(mol_formula(black_box(mol))))
        });
        group.bench_function(format!("groups/{name}"), |b| {
            b.iter(|| black_box(detect_functional_groups(black_box(mol))))
        });
        group.bench_function(format!("signature/{name}"), |b| {
            b.iter(|| black_box(connectivity_signature(black_box(mol))))
        });
        group.bench_function(format!("identify/{name}"), |b| {
            b.iter(|| black_box(identify(black_box(mol))))
        });
        group.bench_function(format!("prompt/{name}"), |b| {
            b.iter(|| black_box(molecule_to_prompt(black_box(mol))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_derive);
criterion_main!(benches);
