use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cpu::{R, RegisterState};

#[test]
fn can_access_gpr() {
    let mut r = RegisterState::default();
    r.set_r32(R::ECX, 0xFFFF_FFFF);
    assert_eq!(0xFFFF_FFFF, r.get_r32(R::ECX));

    r.set_r16(R::CX, 0x1616);
    assert_eq!(0x1616, r.get_r16(R::CX));
    assert_eq!(0xFFFF_1616, r.get_r32(R::ECX));

    r.set_r8(R::CL, 0x08);
    assert_eq!(0x08, r.get_r8(R::CL));
    assert_eq!(0xFFFF_1608, r.get_r32(R::ECX));

    r.set_r8(R::CH, 0x09);
    assert_eq!(0x09, r.get_r8(R::CH));
    assert_eq!(0xFFFF_0908, r.get_r32(R::ECX));
}

#[test]
fn register_names_print_lowercase() {
    assert_eq!("al", R::AL.as_str());
    assert_eq!("ah", R::AH.as_str());
    assert_eq!("ax", R::AX.as_str());
    assert_eq!("eax", R::EAX.as_str());
    assert_eq!("ss", R::SS.as_str());
}

#[test]
fn can_access_sreg() {
    let mut r = RegisterState::default();
    r.set_r16(R::ES, 0x8888);
    assert_eq!(0x8888, r.get_r16(R::ES));
    assert_eq!(0, r.get_r16(R::DS));
}

#[test]
fn aliases_read_back_shift_mask_views() {
    let mut rng = XorShiftRng::seed_from_u64(0x5EED);
    let mut r = RegisterState::default();
    for _ in 0..100_000 {
        let v: u32 = rng.gen();
        r.set_r32(R::EDX, v);
        assert_eq!((v & 0xFFFF) as u16, r.get_r16(R::DX));
        assert_eq!((v & 0xFF) as u8, r.get_r8(R::DL));
        assert_eq!(((v >> 8) & 0xFF) as u8, r.get_r8(R::DH));
    }
}

#[test]
fn narrow_writes_leave_wide_bits_alone() {
    let mut rng = XorShiftRng::seed_from_u64(0xA11A5);
    let mut r = RegisterState::default();
    for _ in 0..100_000 {
        let v: u32 = rng.gen();
        let b: u8 = rng.gen();
        let w: u16 = rng.gen();

        r.set_r32(R::EBX, v);
        r.set_r8(R::BL, b);
        assert_eq!((v & 0xFFFF_FF00) | u32::from(b), r.get_r32(R::EBX));

        r.set_r32(R::EBX, v);
        r.set_r8(R::BH, b);
        assert_eq!((v & 0xFFFF_00FF) | (u32::from(b) << 8), r.get_r32(R::EBX));

        r.set_r32(R::EBX, v);
        r.set_r16(R::BX, w);
        assert_eq!((v & 0xFFFF_0000) | u32::from(w), r.get_r32(R::EBX));
    }
}
