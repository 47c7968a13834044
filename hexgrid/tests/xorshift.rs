use hexgrid::Xorshift128Plus;
use rand::{RngCore, SeedableRng};

fn take(rng: &mut Xorshift128Plus, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.next_u64()).collect()
}

#[test]
fn reference_sequence_for_seed_one_two() {
    let mut rng = Xorshift128Plus::new(1, 2);
    assert_eq!(
        take(&mut rng, 5),
        vec![
            0x0080_0045,
            0x0200_0104,
            0x4000_0200_10c3,
            0xc000_0210_3045,
            0x0001_0008_01c4_50c4,
        ]
    );
}

#[test]
fn reference_sequence_for_seed_used_by_previews() {
    let mut rng = Xorshift128Plus::new(123, 456);
    assert_eq!(
        take(&mut rng, 3),
        vec![0x3d80_213b, 0x0001_1700_8c27, 0x001e_c001_1708_1ea5]
    );
}

#[test]
fn zero_seed_is_coerced_to_a_live_state() {
    let mut zero = Xorshift128Plus::new(0, 0);
    assert_eq!(zero, Xorshift128Plus::new(u64::MAX, 0));
    assert_eq!(
        take(&mut zero, 3),
        vec![0x007f_ffc0, 0x00ff_ff80, 0x4000_007f_efff]
    );
}

#[test]
fn same_seed_same_sequence() {
    let mut a = Xorshift128Plus::new(42, 7);
    let mut b = Xorshift128Plus::new(42, 7);
    assert_eq!(take(&mut a, 100), take(&mut b, 100));
}

#[test]
fn byte_seed_matches_word_seed() {
    let mut seed = [0u8; 16];
    seed[..8].copy_from_slice(&1u64.to_le_bytes());
    seed[8..].copy_from_slice(&2u64.to_le_bytes());
    assert_eq!(Xorshift128Plus::from_seed(seed), Xorshift128Plus::new(1, 2));
    assert_eq!(
        Xorshift128Plus::from_seed([0; 16]),
        Xorshift128Plus::new(0, 0)
    );
}

#[test]
fn fill_bytes_uses_little_endian_words() {
    let mut rng = Xorshift128Plus::new(1, 2);
    let mut buf = [0u8; 12];
    rng.fill_bytes(&mut buf);
    assert_eq!(&buf[..8], &0x0080_0045u64.to_le_bytes());
    assert_eq!(&buf[8..], &0x0200_0104u64.to_le_bytes()[..4]);
}

#[test]
fn next_u32_is_the_high_half() {
    let mut rng = Xorshift128Plus::new(1, 2);
    rng.next_u64();
    rng.next_u64();
    assert_eq!(rng.next_u32(), 0x4000);
}

#[test]
fn entropy_seeded_generators_differ() {
    let mut a = Xorshift128Plus::from_entropy();
    let mut b = Xorshift128Plus::from_entropy();
    assert_ne!(take(&mut a, 4), take(&mut b, 4));
}
