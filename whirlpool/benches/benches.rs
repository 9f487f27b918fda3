use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use solana_sdk::pubkey::Pubkey;
use whirlpool::{
    constants::{TOKEN_PROGRAM_ID, WHIRLPOOL_ID},
    instructions::swap::{SwapAccounts, SwapArgs, swap},
    registry::decode_instruction,
};

pub fn swap_instruction_benchmark(c: &mut Criterion) {
    let args = SwapArgs {
        amount: 1_000_000,
        other_amount_threshold: 950_000,
        sqrt_price_limit: 0,
        amount_specified_is_input: true,
        a_to_b: true,
    };
    let accounts = SwapAccounts {
        token_program: TOKEN_PROGRAM_ID,
        token_authority: Pubkey::new_unique(),
        whirlpool: Pubkey::new_unique(),
        token_owner_account_a: Pubkey::new_unique(),
        token_vault_a: Pubkey::new_unique(),
        token_owner_account_b: Pubkey::new_unique(),
        token_vault_b: Pubkey::new_unique(),
        tick_array_0: Pubkey::new_unique(),
        tick_array_1: Pubkey::new_unique(),
        tick_array_2: Pubkey::new_unique(),
        oracle: Pubkey::new_unique(),
    };

    c.bench_function("build_swap_instruction", |b| {
        b.iter(|| swap(black_box(&WHIRLPOOL_ID), black_box(&args), black_box(&accounts), &[]))
    });

    let data = swap(&WHIRLPOOL_ID, &args, &accounts, &[])
        .expect("swap instruction")
        .data;

    c.bench_function("decode_swap_instruction", |b| {
        b.iter(|| decode_instruction(black_box(&data)))
    });
}

criterion_group!(benches, swap_instruction_benchmark);
criterion_main!(benches);
