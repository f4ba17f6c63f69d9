// Criterion benchmarks for the catalog query layer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pet_adoption::core::{filter_pets, search_pets, Browser, Catalog, CombineMode};
use pet_adoption::models::{AgeRange, FilterCriteria, Gender, Pet, PetType, Size};
use chrono::Utc;

const TYPES: [PetType; 5] = PetType::ALL;

fn create_pet(id: usize) -> Pet {
    Pet {
        id: id.to_string(),
        name: format!("Pet {}", id),
        pet_type: TYPES[id % TYPES.len()],
        breed: if id % 7 == 0 { "Beagle" } else { "Mixed" }.to_string(),
        age: (id % 12) as u32,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        size: match id % 3 {
            0 => Size::Small,
            1 => Size::Medium,
            _ => Size::Large,
        },
        description: "Friendly, house-trained and great with children.".to_string(),
        image: String::new(),
        location: format!("City {}, C{}", id % 40, id % 40),
        vaccinated: id % 5 != 0,
        neutered: id % 3 != 0,
        adoption_fee: 50.0 + (id % 200) as f64,
        created_at: Utc::now(),
    }
}

fn create_criteria() -> FilterCriteria {
    FilterCriteria {
        pet_type: Some(PetType::Dog),
        age: Some(AgeRange { min: Some(1), max: Some(6) }),
        location: Some("city 1".to_string()),
        vaccinated: Some(true),
        ..Default::default()
    }
}

fn bench_sample_catalog(c: &mut Criterion) {
    let catalog = Catalog::sample().expect("sample catalog");
    let criteria = create_criteria();

    c.bench_function("sample_search", |b| {
        b.iter(|| search_pets(black_box(catalog.all()), black_box("beagle")));
    });

    c.bench_function("sample_filter", |b| {
        b.iter(|| filter_pets(black_box(catalog.all()), black_box(&criteria)));
    });
}

fn bench_browse(c: &mut Criterion) {
    let criteria = create_criteria();

    let mut group = c.benchmark_group("browse");

    for pet_count in [12, 100, 1000, 10000].iter() {
        let pets: Vec<Pet> = (0..*pet_count).map(create_pet).collect();
        let catalog = Catalog::new(pets).expect("unique ids");

        for mode in [CombineMode::Intersect, CombineMode::FilterOverridesSearch] {
            let browser = Browser::new(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), pet_count),
                pet_count,
                |b, _| {
                    b.iter(|| browser.browse(black_box(&catalog), black_box("trained"), black_box(&criteria)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sample_catalog, bench_browse);
criterion_main!(benches);
