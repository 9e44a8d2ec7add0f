//! Blog Aggregation
//!
//! Pure reductions over a snapshot of blogs. Input order matters only for
//! tie-breaks: the first maximum wins, and authors are grouped in order
//! of first appearance.

use std::collections::HashMap;

use crate::domain::entity::blog::Blog;

/// The most liked blog, without owner or identifier fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

/// An author and how many blogs they wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// An author and the likes summed over their blogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i128,
}

/// All four aggregates computed over one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total_likes: i128,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

impl BlogStats {
    pub fn from_blogs(blogs: &[Blog]) -> Self {
        Self {
            total_likes: total_likes(blogs),
            favorite_blog: favorite_blog(blogs),
            most_blogs: most_blogs(blogs),
            most_likes: most_likes(blogs),
        }
    }
}

/// Sum of all like counts; 0 for no blogs
///
/// Summed as `i128`, wide enough for any realistic number of `i64` counts.
pub fn total_likes(blogs: &[Blog]) -> i128 {
    blogs.iter().map(|b| i128::from(b.likes)).sum()
}

/// Blog with the most likes
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut best: Option<&Blog> = None;
    for blog in blogs {
        if best.is_none_or(|b| blog.likes > b.likes) {
            best = Some(blog);
        }
    }

    best.map(|b| FavoriteBlog {
        title: b.title.clone(),
        author: b.author.clone(),
        likes: b.likes,
    })
}

/// Author with the most blogs
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    group_by_author(blogs, |_| 1usize)
        .into_iter()
        .fold(None, keep_first_max)
        .map(|(author, blogs)| AuthorBlogs {
            author: author.to_string(),
            blogs,
        })
}

/// Author whose blogs have the most likes in total
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    group_by_author(blogs, |b| i128::from(b.likes))
        .into_iter()
        .fold(None, keep_first_max)
        .map(|(author, likes)| AuthorLikes {
            author: author.to_string(),
            likes,
        })
}

/// Sum `value` per author, authors in order of first appearance
fn group_by_author<V>(blogs: &[Blog], value: impl Fn(&Blog) -> V) -> Vec<(&str, V)>
where
    V: Copy + std::ops::AddAssign,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, V)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_str();
        match index.get(author).copied() {
            Some(i) => groups[i].1 += value(blog),
            None => {
                index.insert(author, groups.len());
                groups.push((author, value(blog)));
            }
        }
    }

    groups
}

fn keep_first_max<'a, V: PartialOrd>(
    best: Option<(&'a str, V)>,
    candidate: (&'a str, V),
) -> Option<(&'a str, V)> {
    match best {
        Some(b) if b.1 >= candidate.1 => Some(b),
        _ => Some(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::blog::NewBlog;
    use kernel::id::UserId;

    fn blog(title: &str, author: &str, likes: i64) -> Blog {
        Blog::new(
            NewBlog {
                title: title.to_string(),
                author: author.to_string(),
                url: format!("https://example.com/{title}"),
                likes,
            },
            UserId::new(),
        )
    }

    fn sample() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(total_likes(&sample()[..1]), 7);
        assert_eq!(total_likes(&sample()), 36);
    }

    #[test]
    fn test_favorite_blog() {
        assert_eq!(favorite_blog(&[]), None);
        assert_eq!(
            favorite_blog(&sample()),
            Some(FavoriteBlog {
                title: "Canonical string reduction".to_string(),
                author: "Edsger W. Dijkstra".to_string(),
                likes: 12,
            })
        );
    }

    #[test]
    fn test_favorite_blog_single_element() {
        let only = blog("Only", "Someone", 3);
        let favorite = favorite_blog(std::slice::from_ref(&only)).unwrap();
        assert_eq!(favorite.title, only.title);
        assert_eq!(favorite.author, only.author);
        assert_eq!(favorite.likes, only.likes);
    }

    #[test]
    fn test_favorite_blog_tie_keeps_first() {
        let blogs = vec![blog("a", "x", 5), blog("b", "y", 5)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "a");
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(most_blogs(&[]), None);
        assert_eq!(
            most_blogs(&sample()),
            Some(AuthorBlogs {
                author: "Robert C. Martin".to_string(),
                blogs: 3,
            })
        );
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(most_likes(&[]), None);
        assert_eq!(
            most_likes(&sample()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            })
        );
    }

    #[test]
    fn test_author_ties_keep_first_appearance() {
        let blogs = vec![
            blog("1", "late", 1),
            blog("2", "early", 4),
            blog("3", "late", 3),
            blog("4", "early", 0),
        ];
        // Both authors have 2 blogs and 4 likes; "late" appears first
        assert_eq!(most_blogs(&blogs).unwrap().author, "late");
        assert_eq!(most_likes(&blogs).unwrap().author, "late");
    }

    #[test]
    fn test_empty_author_is_its_own_group() {
        let blogs = vec![blog("1", "", 1), blog("2", "", 1), blog("3", "named", 1)];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: String::new(),
                blogs: 2,
            })
        );
    }

    #[test]
    fn test_aggregates_agree_with_brute_force() {
        let blogs = sample();
        let best_likes = blogs.iter().map(|b| b.likes).max().unwrap();
        assert_eq!(favorite_blog(&blogs).unwrap().likes, best_likes);

        let largest_group = blogs
            .iter()
            .map(|b| blogs.iter().filter(|o| o.author == b.author).count())
            .max()
            .unwrap();
        assert_eq!(most_blogs(&blogs).unwrap().blogs, largest_group);

        let largest_sum = blogs
            .iter()
            .map(|b| {
                blogs
                    .iter()
                    .filter(|o| o.author == b.author)
                    .map(|o| i128::from(o.likes))
                    .sum::<i128>()
            })
            .max()
            .unwrap();
        assert_eq!(most_likes(&blogs).unwrap().likes, largest_sum);
    }

    #[test]
    fn test_sums_past_i64_range() {
        let blogs = vec![
            blog("a", "big", i64::MAX),
            blog("b", "big", i64::MAX),
            blog("c", "small", 1),
        ];
        let expected = 2 * i128::from(i64::MAX) + 1;

        assert_eq!(total_likes(&blogs), expected);
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "big".to_string(),
                likes: 2 * i128::from(i64::MAX),
            })
        );
        assert_eq!(favorite_blog(&blogs).unwrap().title, "a");
    }

    #[test]
    fn test_stats_bundle() {
        let stats = BlogStats::from_blogs(&[]);
        assert_eq!(stats.total_likes, 0);
        assert!(stats.favorite_blog.is_none());
        assert!(stats.most_blogs.is_none());
        assert!(stats.most_likes.is_none());
    }
}
