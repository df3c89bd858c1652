#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

impl PolyFillType {
    #[inline(always)]
    pub fn is_filled(self, wind_count: i32) -> bool {
        match self {
            PolyFillType::EvenOdd => wind_count % 2 != 0,
            PolyFillType::NonZero => wind_count != 0,
            PolyFillType::Positive => wind_count > 0,
            PolyFillType::Negative => wind_count < 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

impl PolyType {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    #[inline(always)]
    pub fn contains(self, in_subject: bool, in_clip: bool) -> bool {
        match self {
            ClipType::Intersection => in_subject && in_clip,
            ClipType::Union => in_subject || in_clip,
            ClipType::Difference => in_subject && !in_clip,
            ClipType::Xor => in_subject != in_clip,
        }
    }
}

/// Boolean operation requested by callers of [`crate::boolean::boolean`].
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Operation {
    Or,
    And,
    Xor,
    /// `A \ B`; operands are not symmetric.
    Not,
}

impl From<Operation> for ClipType {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Or => ClipType::Union,
            Operation::And => ClipType::Intersection,
            Operation::Xor => ClipType::Xor,
            Operation::Not => ClipType::Difference,
        }
    }
}

/// Corner treatment for offset contours.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum JoinType {
    Miter,
    Bevel,
    Round,
}
