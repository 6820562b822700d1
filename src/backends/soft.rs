use cipher::{
    BlockBackend, BlockSizeUser, ParBlocks, ParBlocksSizeUser,
    consts::{U8, U64},
    inout::InOut,
};
use zeroize::Zeroize;

use super::{CipherBlock, crypt_block, gather, portable::Portable, scatter};
use crate::{
    lanes::{Direction, process_group},
    schedule::Subkeys,
};

/// The software backend: scalar engine for single blocks, portable lanes
/// for groups of eight.
pub(crate) struct Backend<'a> {
    keys: &'a Subkeys,
    dir: Direction,
}

impl<'a> Backend<'a> {
    pub(crate) fn new(keys: &'a Subkeys, dir: Direction) -> Self {
        Self { keys, dir }
    }
}

impl BlockSizeUser for Backend<'_> {
    type BlockSize = U64;
}

impl ParBlocksSizeUser for Backend<'_> {
    type ParBlocksSize = U8;
}

impl BlockBackend for Backend<'_> {
    #[inline]
    fn proc_block(&mut self, block: InOut<'_, '_, CipherBlock>) {
        crypt_block(self.keys, self.dir, block);
    }

    #[inline]
    fn proc_par_blocks(&mut self, mut blocks: InOut<'_, '_, ParBlocks<Self>>) {
        let mut group = gather(blocks.get_in());
        process_group::<Portable, _>(self.keys, self.dir, &mut group);
        scatter(&group, blocks.get_out());
        group.zeroize();
    }
}
