//! # Asset Value Objects
//!
//! ユーザーが選択した動画と参照画像のバリューオブジェクト

/// 動画アセット
///
/// アップロード対象として選択された1本の動画ファイル。
/// ファイル選択のたびに丸ごと置き換えられる（部分更新はしない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    /// ファイル名
    pub name: String,
    /// ファイル内容のバイト列
    pub bytes: Vec<u8>,
}

impl VideoAsset {
    /// 新しい動画アセットを作成
    ///
    /// # Arguments
    ///
    /// * `name` - ファイル名
    /// * `bytes` - ファイル内容
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// 参照画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    /// ファイル名
    pub name: String,
    /// ファイル内容のバイト列
    pub bytes: Vec<u8>,
}

impl ReferenceImage {
    /// 新しい参照画像を作成
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// 参照画像セット
///
/// 選択順を保持する参照画像のコレクションを表すバリューオブジェクト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceImageSet {
    images: Vec<ReferenceImage>,
}

impl ReferenceImageSet {
    /// 新しい参照画像セットを作成
    ///
    /// # Arguments
    ///
    /// * `images` - 選択順に並んだ参照画像のベクター
    pub fn new(images: Vec<ReferenceImage>) -> Self {
        Self { images }
    }

    /// セット内の画像数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// セットが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 画像への参照を選択順で返す
    pub fn images(&self) -> &[ReferenceImage] {
        &self.images
    }

    /// 画像の所有権を移動して返す
    pub fn into_images(self) -> Vec<ReferenceImage> {
        self.images
    }

    /// 選択順のイテレータを返す
    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceImage> {
        self.images.iter()
    }
}

impl From<Vec<ReferenceImage>> for ReferenceImageSet {
    fn from(images: Vec<ReferenceImage>) -> Self {
        Self::new(images)
    }
}

impl From<ReferenceImageSet> for Vec<ReferenceImage> {
    fn from(set: ReferenceImageSet) -> Self {
        set.into_images()
    }
}
