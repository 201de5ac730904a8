/// Options to control how many native file handles stay open
///
/// See [`ResourceManager`](crate::resource::ResourceManager).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ResourceOptions {
	pub(crate) max_open_files: usize,
	pub(crate) eviction_slack: usize,
}

impl ResourceOptions {
	/// Default soft cap on open files
	pub const DEFAULT_MAX_OPEN_FILES: usize = 15;
	/// Default number of files allowed over the cap before evicting
	pub const DEFAULT_EVICTION_SLACK: usize = 5;

	/// Creates a new `ResourceOptions`, alias for `Default` implementation
	///
	/// See also: [`ResourceOptions::default`]
	pub const fn new() -> Self {
		Self {
			max_open_files: Self::DEFAULT_MAX_OPEN_FILES,
			eviction_slack: Self::DEFAULT_EVICTION_SLACK,
		}
	}

	/// The number of open files to shrink down to when evicting
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ResourceOptions;
	///
	/// let options = ResourceOptions::new().max_open_files(64);
	/// ```
	pub const fn max_open_files(mut self, max_open_files: usize) -> Self {
		self.max_open_files = max_open_files;
		self
	}

	/// How far over [`max_open_files`](Self::max_open_files) the open count may grow before
	/// eviction kicks in
	pub const fn eviction_slack(mut self, eviction_slack: usize) -> Self {
		self.eviction_slack = eviction_slack;
		self
	}
}

impl Default for ResourceOptions {
	/// The default implementation for `ResourceOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ResourceOptions {
	/// 	max_open_files: 15,
	/// 	eviction_slack: 5,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
