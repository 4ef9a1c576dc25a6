//! Seed deals for the pipeline board.

use dealer_domain::prelude::*;

/// A board populated across every stage.
pub fn seed_board() -> PipelineBoard {
    PipelineBoard::with_deals(
        Currency::KRW,
        vec![
            Deal::in_stage("Kim Minjun", "GS90", Money::krw(82_400_000), DealStage::Lead)
                .with_note("Walk-in, asked for the Signature trim"),
            Deal::in_stage("Lee Seoyeon", "Evo 6", Money::krw(57_900_000), DealStage::Lead),
            Deal::in_stage("Park Jiho", "Terra", Money::krw(51_200_000), DealStage::Qualified)
                .with_note("Trade-in appraisal pending"),
            Deal::in_stage("Choi Haeun", "GS70", Money::krw(54_300_000), DealStage::TestDrive),
            Deal::in_stage("Jung Woojin", "Stinger GT", Money::krw(61_750_000), DealStage::TestDrive)
                .with_note("Second drive booked for Saturday"),
            Deal::in_stage("Kang Dain", "Sante", Money::krw(45_600_000), DealStage::Negotiation),
            Deal::in_stage("Yoon Sua", "Evo 9", Money::krw(71_000_000), DealStage::Contract)
                .with_note("Waiting on fleet registration"),
            Deal::in_stage("Shin Dohyun", "Aria", Money::krw(29_800_000), DealStage::Delivered),
        ],
    )
}
