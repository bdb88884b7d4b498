use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use conjdr::engine::catalog;
use conjdr::engine::prompt::Prompt;
use conjdr::engine::sampler::{QuestionSampler, select};
use conjdr::engine::stats::{PromptStats, StatisticsStore};
use conjdr::vocab::VocabularyTable;

const CLUES: usize = 12;

/// A catalog of `verbs * CLUES` prompts with a spread of streaks.
fn make_store(verbs: usize) -> StatisticsStore {
    let mut header = vec![String::new(), String::new()];
    header.extend((0..CLUES).map(|c| format!("clue{c}")));
    let mut rows = vec![header];
    for v in 0..verbs {
        let mut row = vec![String::new(), format!("verb{v}")];
        row.extend((0..CLUES).map(|c| format!("form{v}_{c}")));
        rows.push(row);
    }
    let table = VocabularyTable::from_rows(rows).unwrap();
    let (mut store, _) = catalog::build(&table);

    let prompts: Vec<Prompt> = store.prompts().to_vec();
    for (i, prompt) in prompts.iter().enumerate() {
        let streak = (i % 9) as u16;
        store.update_stats(prompt, PromptStats::new(streak, streak + 1, (i % 4) as u16));
    }
    store
}

fn bench_draw(c: &mut Criterion) {
    let store = make_store(100);
    let mut sampler = QuestionSampler::new(SmallRng::seed_from_u64(42));

    c.bench_function("draw (1200 prompts)", |b| {
        b.iter(|| sampler.draw(black_box(&store)).unwrap())
    });
}

fn bench_select(c: &mut Criterion) {
    let store = make_store(100);
    let near_end = store.total_weight() * 0.999;

    c.bench_function("select last prompt (1200 prompts)", |b| {
        b.iter(|| select(black_box(&store), black_box(near_end)))
    });
}

fn bench_streak_updates(c: &mut Criterion) {
    let mut store = make_store(100);
    let prompts: Vec<Prompt> = store.prompts().iter().take(400).cloned().collect();

    c.bench_function("continue/end streak (400 answers)", |b| {
        b.iter(|| {
            for (i, prompt) in prompts.iter().enumerate() {
                if i % 5 == 0 {
                    store.end_streak(black_box(prompt));
                } else {
                    store.continue_streak(black_box(prompt));
                }
            }
        })
    });
}

fn bench_pack(c: &mut Criterion) {
    let store = make_store(100);

    c.bench_function("pack (1200 attempted prompts)", |b| {
        b.iter(|| black_box(&store).pack())
    });
}

criterion_group!(benches, bench_draw, bench_select, bench_streak_updates, bench_pack);
criterion_main!(benches);
