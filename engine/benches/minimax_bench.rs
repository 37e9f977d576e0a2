use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use engine::{BotDifficulty, BotInput, EMPTY_BOARD, GameRng, Mark, calculate_move, evaluate};

fn bench_single_move_empty_board() {
    let input = BotInput {
        board: EMPTY_BOARD,
        bot_mark: Mark::X,
    };
    let mut rng = GameRng::from_random();
    calculate_move(BotDifficulty::Advanced, input, &mut rng);
}

fn bench_single_move_mid_game() {
    let mut board = EMPTY_BOARD;
    for (index, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board[index] = mark;
    }

    let input = BotInput {
        board,
        bot_mark: Mark::X,
    };
    let mut rng = GameRng::from_random();
    calculate_move(BotDifficulty::Advanced, input, &mut rng);
}

fn bench_full_game() {
    let mut board = EMPTY_BOARD;
    let mut current_mark = Mark::X;
    let mut rng = GameRng::from_random();

    while evaluate(&board).is_none() {
        let input = BotInput {
            board,
            bot_mark: current_mark,
        };
        let Some(index) = calculate_move(BotDifficulty::Advanced, input, &mut rng) else {
            break;
        };
        board[index] = current_mark;
        current_mark = current_mark.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sampling_mode(SamplingMode::Flat).sample_size(10);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
