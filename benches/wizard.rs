use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use onboard_core::{
    validate, LocalDraftCache, MemoryStore, NavigationController, WizardSettings,
};
use onboard_domain::{Field, PersistPolicy, ProfileDraft, Step};

fn complete_draft() -> ProfileDraft {
    ProfileDraft::default()
        .with_field(Field::Name, "Ada Lovelace")
        .with_field(Field::Email, "ada@example.com")
        .with_field(Field::CompanyName, "Analytics Engine")
        .with_field(Field::Industry, "Tech")
        .with_field(Field::Size, "11-50")
}

fn bench_validate(c: &mut Criterion) {
    let valid = complete_draft();
    let empty = ProfileDraft::default();

    c.bench_function("validate_all_steps_valid", |b| {
        b.iter(|| {
            for step in Step::ALL {
                black_box(validate(step, black_box(&valid)));
            }
        })
    });

    c.bench_function("validate_personal_empty", |b| {
        b.iter(|| black_box(validate(Step::Personal, black_box(&empty))))
    });
}

fn bench_navigation(c: &mut Criterion) {
    for (name, policy) in [
        ("wizard_run_on_transition", PersistPolicy::OnTransition),
        ("wizard_run_every_change", PersistPolicy::EveryChange),
    ] {
        c.bench_function(name, |b| {
            b.iter_batched(
                MemoryStore::new,
                |store| {
                    let settings = WizardSettings {
                        persist_policy: policy,
                        ..WizardSettings::default()
                    };
                    let mut nav =
                        NavigationController::mount(LocalDraftCache::new(&store, "bench"), settings);
                    for (field, value) in complete_draft().entries() {
                        nav.set_field(field, value).expect("edit");
                    }
                    nav.next().expect("to business");
                    nav.next().expect("to preferences");
                    black_box(nav.submit().expect("submit"));
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_validate, bench_navigation);
criterion_main!(benches);
