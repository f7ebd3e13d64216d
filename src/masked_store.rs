//! Byte-masked store for the fixed-width backend.
//!
//! The 128-bit register model has no masked store. We emulate one: derive a
//! byte select mask from the sign bit of each mask byte, blend the source
//! into the current destination contents and write all 16 bytes back.
use bytemuck::Pod;
use wide::*;

pub const REGISTER_BYTES: usize = 16;

/// Write the bytes of `a` whose corresponding `mask` byte has its sign bit
/// set into `mem`; every other byte of `mem[..16]` keeps its content.
///
/// Panics if `mem` is shorter than one register.
#[inline(always)]
pub fn mask_move(a: i8x16, mask: i8x16, mem: &mut [u8]) {
    let dst = &mut mem[..REGISTER_BYTES];
    let mut current = [0u8; REGISTER_BYTES];
    current.copy_from_slice(dst);
    let current: i8x16 = bytemuck::cast(current);

    // 0 > m exactly when the sign bit of m is set.
    let select = i8x16::splat(0).cmp_gt(mask);
    let blended = select.blend(a, current);

    let out: [u8; REGISTER_BYTES] = bytemuck::cast(blended);
    dst.copy_from_slice(&out);
}

/// Typed front end over [`mask_move`] used by the fixed-width processors.
#[inline(always)]
pub fn store_with_mask<V: Pod, T: Pod>(x: V, vmask: V, dst: &mut [T]) {
    let lanes = REGISTER_BYTES / std::mem::size_of::<T>();
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut dst[..lanes]);
    mask_move(bytemuck::cast(x), bytemuck::cast(vmask), bytes);
}
