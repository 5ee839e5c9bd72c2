//! Wrappers over the host's PDF renderer and its page type.

use crate::bind::ClassBinding;
use crate::host::{Arg, HostEnv};
use crate::platform::{Bitmap, ParcelFileDescriptor};
use crate::Result;

const RENDERER_CLASS: &str = "android/graphics/pdf/PdfRenderer";
const PAGE_CLASS: &str = "android/graphics/pdf/PdfRenderer$Page";
const CTOR_SIG: &str = "(Landroid/os/ParcelFileDescriptor;)V";
const OPEN_PAGE_SIG: &str = "(I)Landroid/graphics/pdf/PdfRenderer$Page;";
const RENDER_SIG: &str =
    "(Landroid/graphics/Bitmap;Landroid/graphics/Rect;Landroid/graphics/pdf/PdfRenderer$Page$RenderMode;)V";

/// The host reports page sizes in points at this resolution.
const BASE_DPI: i32 = 72;

/// Handle to a host PDF renderer constructed over an open descriptor.
pub struct PdfRenderer<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    get_page_count: E::Method,
    open_page: E::Method,
}

impl<'e, E: HostEnv> PdfRenderer<'e, E> {
    /// Construct the host renderer from an open file descriptor.
    pub fn new(env: &'e E, descriptor: &ParcelFileDescriptor<'e, E>) -> Result<Self> {
        let binding = ClassBinding::resolve(env, RENDERER_CLASS)?;
        let ctor = binding.method("<init>", CTOR_SIG)?;
        let object = env.new_object(binding.class(), ctor, &[Arg::Object(descriptor.object())])?;
        let get_page_count = binding.method("getPageCount", "()I")?;
        let open_page = binding.method("openPage", OPEN_PAGE_SIG)?;
        Ok(Self {
            binding,
            object,
            get_page_count,
            open_page,
        })
    }

    pub fn page_count(&self) -> Result<i32> {
        self.binding
            .env()
            .call_int(self.object, self.get_page_count, &[])
    }

    /// Open the page at `index`. The index is forwarded unvalidated; an
    /// out-of-range request surfaces the host's own fault.
    pub fn open_page(&self, index: i32) -> Result<Page<'e, E>> {
        let env = self.binding.env();
        let page = env.call_object(self.object, self.open_page, &[Arg::Int(index)])?;
        Page::from_object(env, page)
    }

    pub fn object(&self) -> E::Object {
        self.object
    }
}

/// Handle to one open page of a [`PdfRenderer`].
pub struct Page<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    render: E::Method,
    get_width: E::Method,
    get_height: E::Method,
}

impl<'e, E: HostEnv> Page<'e, E> {
    pub fn from_object(env: &'e E, object: E::Object) -> Result<Self> {
        let binding = ClassBinding::resolve(env, PAGE_CLASS)?;
        let render = binding.method("render", RENDER_SIG)?;
        let get_width = binding.method("getWidth", "()I")?;
        let get_height = binding.method("getHeight", "()I")?;
        Ok(Self {
            binding,
            object,
            render,
            get_width,
            get_height,
        })
    }

    /// Page width in pixels at the requested resolution. The host reports
    /// the size in points; positive DPI on a valid page yields a positive
    /// width.
    pub fn width(&self, dpi: i32) -> Result<i32> {
        let points = self
            .binding
            .env()
            .call_int(self.object, self.get_width, &[])?;
        Ok(points * dpi / BASE_DPI)
    }

    /// Page height in pixels at the requested resolution.
    pub fn height(&self, dpi: i32) -> Result<i32> {
        let points = self
            .binding
            .env()
            .call_int(self.object, self.get_height, &[])?;
        Ok(points * dpi / BASE_DPI)
    }

    /// Render this page into a freshly created bitmap sized for `dpi`.
    pub fn render(&self, dpi: i32) -> Result<Bitmap<'e, E>> {
        let env = self.binding.env();
        let width = self.width(dpi)?;
        let height = self.height(dpi)?;
        let bitmap = Bitmap::create(env, width, height)?;
        env.call_void(
            self.object,
            self.render,
            &[Arg::Object(bitmap.object()), Arg::Null, Arg::Null],
        )?;
        Ok(bitmap)
    }

    pub fn object(&self) -> E::Object {
        self.object
    }
}
